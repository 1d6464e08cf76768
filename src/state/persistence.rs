use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PlanError, Result};
use crate::interface::options::normalize_inputs;
use crate::models::Inputs;

/// Load a planning profile from a JSON file.
///
/// Option labels are resolved against the fixed option sets, so a profile written by
/// hand with "dairy-free" or "chiken" still loads with the canonical labels.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Inputs> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PlanError::ProfileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let inputs: Inputs = serde_json::from_str(&content)?;
    let inputs = normalize_inputs(inputs)?;

    debug!(path = %path.display(), diet = inputs.diet_type.label(), "loaded profile");
    Ok(inputs)
}

/// Save a planning profile as pretty JSON.
pub fn save_profile<P: AsRef<Path>>(path: P, inputs: &Inputs) -> Result<()> {
    let json = serde_json::to_string_pretty(inputs)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "saved profile");
    Ok(())
}
