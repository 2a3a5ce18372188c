pub mod archetype;
pub mod calibration;
pub mod logit;
pub mod traits;
