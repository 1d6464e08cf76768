use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::Inputs;
use crate::planner::constants::{
    ALLERGY_OPTIONS, AVOID_FOOD_OPTIONS, MAX_ALLERGIES, NONE_OPTION, NO_PREFERENCE,
    PREFERRED_PROTEIN_OPTIONS,
};

/// Minimum Jaro-Winkler similarity for a fuzzy option match.
const FUZZY_THRESHOLD: f64 = 0.85;

/// Resolve a typed label to its canonical option.
///
/// Tries an exact match, then a case-insensitive one, then the closest fuzzy match.
pub fn resolve_option(
    kind: &'static str,
    value: &str,
    options: &[&'static str],
) -> Result<&'static str> {
    let value = value.trim();

    if let Some(exact) = options.iter().find(|o| **o == value) {
        return Ok(*exact);
    }

    let lower = value.to_lowercase();
    if let Some(found) = options.iter().find(|o| o.to_lowercase() == lower) {
        return Ok(*found);
    }

    let best = options
        .iter()
        .map(|o| (*o, jaro_winkler(&o.to_lowercase(), &lower)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((option, score)) => {
            debug!(kind, value, option, score, "fuzzy matched option");
            Ok(option)
        }
        None => Err(PlanError::UnknownOption {
            kind,
            value: value.to_string(),
        }),
    }
}

pub fn resolve_allergy(value: &str) -> Result<&'static str> {
    if value.trim().is_empty() {
        return Ok(NONE_OPTION);
    }
    resolve_option("allergy", value, &ALLERGY_OPTIONS)
}

pub fn resolve_preferred_protein(value: &str) -> Result<&'static str> {
    if value.trim().is_empty() {
        return Ok(NO_PREFERENCE);
    }
    resolve_option("preferred protein", value, &PREFERRED_PROTEIN_OPTIONS)
}

pub fn resolve_avoid_food(value: &str) -> Result<&'static str> {
    if value.trim().is_empty() {
        return Ok(NONE_OPTION);
    }
    resolve_option("avoid food", value, &AVOID_FOOD_OPTIONS)
}

/// Canonicalize every option label in a profile.
pub fn normalize_inputs(mut inputs: Inputs) -> Result<Inputs> {
    if inputs.allergies.len() > MAX_ALLERGIES {
        return Err(PlanError::InvalidInput(format!(
            "at most {} allergy selections are supported (got {})",
            MAX_ALLERGIES,
            inputs.allergies.len()
        )));
    }

    inputs.allergies = inputs
        .allergies
        .iter()
        .map(|a| resolve_allergy(a).map(str::to_string))
        .collect::<Result<Vec<_>>>()?;
    inputs.preferred_protein = resolve_preferred_protein(&inputs.preferred_protein)?.to_string();
    inputs.avoid_food = resolve_avoid_food(&inputs.avoid_food)?.to_string();
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_case_insensitive() {
        assert_eq!(resolve_allergy("Nut-Free").unwrap(), "Nut-Free");
        assert_eq!(resolve_allergy("nut-free").unwrap(), "Nut-Free");
        assert_eq!(resolve_avoid_food("RED MEAT").unwrap(), "Red meat");
    }

    #[test]
    fn test_fuzzy_match() {
        assert_eq!(resolve_preferred_protein("Chiken").unwrap(), "Chicken");
        assert_eq!(resolve_avoid_food("Potatos").unwrap(), "Potatoes");
    }

    #[test]
    fn test_blank_maps_to_sentinel() {
        assert_eq!(resolve_allergy("").unwrap(), NONE_OPTION);
        assert_eq!(resolve_preferred_protein("  ").unwrap(), NO_PREFERENCE);
    }

    #[test]
    fn test_unknown_option() {
        let err = resolve_avoid_food("Quantum foam").unwrap_err();
        assert!(matches!(err, PlanError::UnknownOption { kind: "avoid food", .. }));
    }
}
