use std::collections::HashMap;
use std::sync::LazyLock;

// ─────────────────────────────────────────────────────────────────────────────
// Option sets offered to the user
// ─────────────────────────────────────────────────────────────────────────────

/// Sentinel meaning "no selection" in the allergy and avoid-food option sets.
pub const NONE_OPTION: &str = "None";

/// Sentinel meaning "no preferred protein".
pub const NO_PREFERENCE: &str = "No preference";

pub const ALLERGY_OPTIONS: [&str; 8] = [
    NONE_OPTION,
    "Dairy-Free",
    "Gluten-Free",
    "Nut-Free",
    "Egg-Free",
    "Soy-Free",
    "Fish-Free",
    "Shellfish-Free",
];

pub const PREFERRED_PROTEIN_OPTIONS: [&str; 11] = [
    NO_PREFERENCE,
    "Chicken",
    "Turkey",
    "Lean beef",
    "Fish (salmon/white fish)",
    "Eggs",
    "Greek yogurt / cottage cheese",
    "Tofu / tempeh",
    "Lentils / beans",
    "Whey protein",
    "Plant protein",
];

pub const AVOID_FOOD_OPTIONS: [&str; 12] = [
    NONE_OPTION,
    "Red meat",
    "Fish",
    "Eggs",
    "Dairy",
    "Gluten",
    "Nuts",
    "Soy",
    "Oats",
    "Rice",
    "Potatoes",
    "Legumes",
];

/// Maximum number of allergy selections a profile carries.
pub const MAX_ALLERGIES: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Target calculation
// ─────────────────────────────────────────────────────────────────────────────

pub const KG_PER_LB: f64 = 0.45359237;
pub const CM_PER_INCH: f64 = 2.54;
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Mifflin-St Jeor coefficients.
pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Calorie multipliers applied to TDEE.
pub const CUT_CALORIE_FACTOR: f64 = 0.85;
pub const BULK_CALORIE_FACTOR: f64 = 1.10;

/// Protein grams per pound of bodyweight.
pub const CUT_PROTEIN_PER_LB: f64 = 0.9;
pub const MAINTAIN_PROTEIN_PER_LB: f64 = 0.8;
pub const BULK_PROTEIN_PER_LB: f64 = 0.75;
pub const HIGH_PROTEIN_BONUS_PER_LB: f64 = 0.1;

/// Fat grams per pound of bodyweight.
pub const FAT_PER_LB: f64 = 0.3;
pub const LOW_CARB_FAT_PER_LB: f64 = 0.4;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Vegan carbs are scaled up and protein is floored per pound.
pub const VEGAN_CARB_FACTOR: f64 = 1.05;
pub const VEGAN_MIN_PROTEIN_PER_LB: f64 = 0.8;

pub const DEFAULT_AGE: u32 = 25;

// ─────────────────────────────────────────────────────────────────────────────
// Portion guidance
// ─────────────────────────────────────────────────────────────────────────────

/// Grams of protein per scoop for plant-based portions.
pub const PROTEIN_G_PER_SCOOP: f64 = 25.0;
pub const SCOOPS_MIN: f64 = 0.5;
pub const SCOOPS_MAX: f64 = 3.0;

/// Protein fraction of a cooked protein source by weight.
pub const PROTEIN_FRACTION: f64 = 0.25;
pub const PROTEIN_SOURCE_G_MIN: f64 = 80.0;
pub const PROTEIN_SOURCE_G_MAX: f64 = 280.0;

/// Carb fraction of cooked starch by weight.
pub const CARB_FRACTION: f64 = 0.28;
pub const CARBS_G_MIN: f64 = 80.0;
pub const CARBS_G_MAX: f64 = 450.0;
pub const LOW_CARB_G_MAX: f64 = 350.0;

/// At or below this many carb grams per meal, low-carb plans list raw grams.
pub const LOW_CARB_RAW_THRESHOLD: i64 = 30;

pub const FAT_G_PER_TBSP: f64 = 14.0;
pub const TBSP_MIN: f64 = 0.5;
pub const TBSP_MAX: f64 = 3.0;

pub const PORTION_SEPARATOR: &str = " • ";

// ─────────────────────────────────────────────────────────────────────────────
// Food tables
// ─────────────────────────────────────────────────────────────────────────────

pub const OMNIVORE_PROTEINS: [&str; 8] = [
    "chicken breast",
    "turkey breast",
    "lean beef",
    "salmon",
    "white fish",
    "eggs",
    "Greek yogurt",
    "whey protein",
];

pub const VEGETARIAN_PROTEINS: [&str; 8] = [
    "eggs",
    "Greek yogurt",
    "cottage cheese",
    "tofu",
    "tempeh",
    "lentils",
    "beans",
    "plant protein",
];

pub const VEGAN_PROTEINS: [&str; 6] = [
    "tofu",
    "tempeh",
    "lentils",
    "beans",
    "chickpeas",
    "plant protein",
];

/// Substituted when restrictions leave the protein pool empty.
pub const GENERIC_PROTEIN: &str = "lean protein";

pub const LOW_CARB_CARBS: [&str; 4] = [
    "berries",
    "mixed veggies",
    "cauliflower rice",
    "zucchini noodles",
];

pub const STARCHY_CARBS: [&str; 8] = [
    "oats",
    "rice",
    "sweet potato",
    "potatoes",
    "quinoa",
    "fruit",
    "beans",
    "lentils",
];

pub const FAT_SOURCES: [&str; 3] = ["olive oil", "avocado", "peanut butter"];

pub const OLIVE_OIL: &str = "olive oil";
pub const AVOCADO: &str = "avocado";
pub const WHEY_PROTEIN: &str = "whey protein";
pub const PLANT_PROTEIN: &str = "plant protein";
pub const GREEK_YOGURT: &str = "Greek yogurt";

/// Preferred-protein label to the keyword that marks a matching pool item.
pub static PREFERENCE_KEYWORDS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("Chicken", "chicken");
        m.insert("Turkey", "turkey");
        m.insert("Lean beef", "beef");
        m.insert("Fish (salmon/white fish)", "fish");
        m.insert("Eggs", "egg");
        m.insert("Greek yogurt / cottage cheese", "yogurt");
        m.insert("Tofu / tempeh", "tofu");
        m.insert("Lentils / beans", "lentil");
        m.insert("Whey protein", "whey");
        m.insert("Plant protein", "plant");
        m
    });

/// Keyword for a preferred-protein label; unknown labels match on their lowercased text.
pub fn preference_keyword(label: &str) -> String {
    PREFERENCE_KEYWORDS
        .get(label)
        .map(|k| (*k).to_string())
        .unwrap_or_else(|| label.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_sets_start_with_sentinel() {
        assert_eq!(ALLERGY_OPTIONS[0], NONE_OPTION);
        assert_eq!(AVOID_FOOD_OPTIONS[0], NONE_OPTION);
        assert_eq!(PREFERRED_PROTEIN_OPTIONS[0], NO_PREFERENCE);
    }

    #[test]
    fn test_every_preference_has_keyword() {
        for label in PREFERRED_PROTEIN_OPTIONS.iter().skip(1) {
            assert!(PREFERENCE_KEYWORDS.contains_key(label), "{}", label);
        }
    }

    #[test]
    fn test_preference_keyword_fallback() {
        assert_eq!(preference_keyword("Lean beef"), "beef");
        assert_eq!(preference_keyword("Seitan"), "seitan");
    }
}
