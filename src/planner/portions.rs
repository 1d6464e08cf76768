use crate::models::{DietType, MacroSet};
use crate::planner::constants::*;

fn protein_portion(protein_g: i64, diet: DietType) -> String {
    let protein_g = protein_g as f64;
    if diet.is_plant_based() {
        let scoops = (protein_g / PROTEIN_G_PER_SCOOP).clamp(SCOOPS_MIN, SCOOPS_MAX);
        format!("{:.1} scoops protein", scoops)
    } else {
        let grams = (protein_g / PROTEIN_FRACTION).clamp(PROTEIN_SOURCE_G_MIN, PROTEIN_SOURCE_G_MAX);
        format!("{} g protein source", grams.round())
    }
}

fn carb_portion(carbs_g: i64, diet: DietType) -> String {
    if diet == DietType::LowCarb {
        if carbs_g <= LOW_CARB_RAW_THRESHOLD {
            return format!("{} g carbs (fruit/veg)", carbs_g);
        }
        let grams = (carbs_g as f64 / CARB_FRACTION).clamp(CARBS_G_MIN, LOW_CARB_G_MAX);
        return format!("{} g cooked carb (rice/potato alt)", grams.round());
    }
    let grams = (carbs_g as f64 / CARB_FRACTION).clamp(CARBS_G_MIN, CARBS_G_MAX);
    format!("{} g cooked carbs", grams.round())
}

fn fat_portion(fats_g: i64) -> String {
    let tbsp = (fats_g as f64 / FAT_G_PER_TBSP).clamp(TBSP_MIN, TBSP_MAX);
    format!("{:.1} tbsp fats (oil/nut butter/avocado)", tbsp)
}

/// Human-readable portion guidance for one meal's macro share.
pub fn portions_for_meal(per_meal: &MacroSet, diet: DietType) -> String {
    [
        protein_portion(per_meal.protein_g, diet),
        carb_portion(per_meal.carbs_g, diet),
        fat_portion(per_meal.fats_g),
    ]
    .join(PORTION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(protein_g: i64, carbs_g: i64, fats_g: i64) -> MacroSet {
        MacroSet {
            calories: 0,
            protein_g,
            carbs_g,
            fats_g,
        }
    }

    #[test]
    fn test_standard_portions() {
        let s = portions_for_meal(&meal(36, 101, 14), DietType::Standard);
        assert_eq!(
            s,
            "144 g protein source • 361 g cooked carbs • 1.0 tbsp fats (oil/nut butter/avocado)"
        );
    }

    #[test]
    fn test_protein_clamps() {
        assert_eq!(protein_portion(5, DietType::Standard), "80 g protein source");
        assert_eq!(protein_portion(100, DietType::HighProtein), "280 g protein source");
        assert_eq!(protein_portion(5, DietType::Vegan), "0.5 scoops protein");
        assert_eq!(protein_portion(40, DietType::Vegetarian), "1.6 scoops protein");
        assert_eq!(protein_portion(90, DietType::Vegan), "3.0 scoops protein");
    }

    #[test]
    fn test_low_carb_branches() {
        assert_eq!(carb_portion(30, DietType::LowCarb), "30 g carbs (fruit/veg)");
        assert_eq!(
            carb_portion(31, DietType::LowCarb),
            "111 g cooked carb (rice/potato alt)"
        );
        assert_eq!(
            carb_portion(200, DietType::LowCarb),
            "350 g cooked carb (rice/potato alt)"
        );
    }

    #[test]
    fn test_carb_clamps() {
        assert_eq!(carb_portion(0, DietType::Standard), "80 g cooked carbs");
        assert_eq!(carb_portion(500, DietType::Vegan), "450 g cooked carbs");
    }

    #[test]
    fn test_fat_clamps() {
        assert_eq!(fat_portion(0), "0.5 tbsp fats (oil/nut butter/avocado)");
        assert_eq!(fat_portion(100), "3.0 tbsp fats (oil/nut butter/avocado)");
        assert_eq!(fat_portion(21), "1.5 tbsp fats (oil/nut butter/avocado)");
    }
}
