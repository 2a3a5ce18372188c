use crate::model::traits::clip01;

/// Responses are clipped to this band before the logit transform so that
/// `ln(p / (1 - p))` stays finite.
pub const RESPONSE_FLOOR: f64 = 0.01;
pub const RESPONSE_CEIL: f64 = 0.99;

/// Logits beyond this magnitude saturate to 0 or 1.
pub const LOGIT_SATURATION: f64 = 10.0;

pub fn clip_response(p: f64) -> f64 {
    p.clamp(RESPONSE_FLOOR, RESPONSE_CEIL)
}

pub fn response_logit(p: f64) -> f64 {
    let p = clip_response(p);
    (p / (1.0 - p)).ln()
}

pub fn logit_to_unit(logit: f64) -> f64 {
    if logit.is_nan() {
        return 0.5;
    }
    if logit > LOGIT_SATURATION {
        return 1.0;
    }
    if logit < -LOGIT_SATURATION {
        return 0.0;
    }
    let e = logit.exp();
    clip01(e / (1.0 + e))
}

/// Weight-normalized average. Falls back to the plain mean when the weights
/// are missing, mismatched in count, or sum to zero.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    if weights.len() == values.len() {
        let total: f64 = weights.iter().sum();
        if total > 0.0 {
            let acc: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
            return Some(acc / total);
        }
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/logit.rs"]
mod tests;
