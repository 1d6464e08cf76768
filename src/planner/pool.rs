use crate::models::DietType;
use crate::planner::constants::*;
use crate::planner::restrictions::{is_avoided, restriction_tags};

/// Base protein table for a diet. Standard, high-protein and low-carb share the omnivore pool.
pub fn base_protein_pool(diet: DietType) -> &'static [&'static str] {
    match diet {
        DietType::Standard | DietType::HighProtein | DietType::LowCarb => &OMNIVORE_PROTEINS,
        DietType::Vegetarian => &VEGETARIAN_PROTEINS,
        DietType::Vegan => &VEGAN_PROTEINS,
    }
}

/// Drop items excluded by the allergy restrictions. Filtering twice gives the same pool.
pub fn filter_by_restrictions(pool: &[&'static str], restrictions: &[String]) -> Vec<&'static str> {
    let banned: Vec<_> = restrictions
        .iter()
        .flat_map(|r| restriction_tags(r).iter().copied())
        .collect();

    pool.iter()
        .copied()
        .filter(|food| !banned.iter().any(|tag| tag.matches(food)))
        .collect()
}

/// Diet-appropriate protein sources with restricted items removed.
///
/// May be empty; callers substitute [`GENERIC_PROTEIN`].
pub fn build_protein_pool(diet: DietType, restrictions: &[String]) -> Vec<&'static str> {
    filter_by_restrictions(base_protein_pool(diet), restrictions)
}

/// Move items matching the preferred protein to the front, keeping relative order.
pub fn apply_preference(pool: &mut [&'static str], preferred: &str) {
    if preferred.is_empty() || preferred == NO_PREFERENCE {
        return;
    }
    let keyword = preference_keyword(preferred);
    // sort_by_key is stable, so non-matching items keep their order.
    pool.sort_by_key(|food| !food.contains(keyword.as_str()));
}

/// The final pool a day plan draws proteins from: restricted, preference-ordered,
/// avoid-filtered and never empty.
pub fn protein_choices(
    diet: DietType,
    restrictions: &[String],
    preferred: &str,
    avoid: &str,
) -> Vec<&'static str> {
    let mut pool = build_protein_pool(diet, restrictions);
    apply_preference(&mut pool, preferred);
    pool.retain(|food| !is_avoided(food, avoid));

    if pool.is_empty() {
        tracing::warn!(
            diet = diet.label(),
            ?restrictions,
            avoid,
            "protein pool empty after filtering, using generic protein"
        );
        pool.push(GENERIC_PROTEIN);
    }
    pool
}
