use std::path::Path;

use crate::input::{InputError, open_maybe_gz};
use crate::model::calibration::Calibration;

pub fn load_calibration(path: &Path) -> Result<Calibration, InputError> {
    let reader = open_maybe_gz(path)?;
    let calibration: Calibration = serde_json::from_reader(reader)?;
    tracing::info!(
        path = %path.display(),
        items = calibration.item_difficulty.len(),
        persons = calibration.person_ability.len(),
        "loaded calibration snapshot"
    );
    if calibration.is_empty() {
        tracing::warn!("calibration snapshot is empty; scoring falls back to arithmetic means");
    }
    Ok(calibration)
}

#[cfg(test)]
pub fn parse_calibration_str(json: &str) -> Result<Calibration, InputError> {
    Ok(serde_json::from_str(json)?)
}
