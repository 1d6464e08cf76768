use tracing::debug;

use crate::models::{DietType, Goal, Inputs, MacroOverride, MacroSet, MealsPerDay, Sex, Targets};
use crate::planner::constants::*;
use crate::planner::conversions::{feet_inches_to_cm, lb_to_kg};

/// Basal metabolic rate via Mifflin-St Jeor.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm - BMR_AGE_COEF * f64::from(age)
        + offset
}

/// Goal-adjusted daily calories from TDEE.
pub fn goal_calories(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Cut => tdee * CUT_CALORIE_FACTOR,
        Goal::Maintain => tdee,
        Goal::Bulk => tdee * BULK_CALORIE_FACTOR,
    }
}

/// Protein grams per pound of bodyweight.
pub fn protein_per_lb(goal: Goal, diet: DietType) -> f64 {
    let base = match goal {
        Goal::Cut => CUT_PROTEIN_PER_LB,
        Goal::Maintain => MAINTAIN_PROTEIN_PER_LB,
        Goal::Bulk => BULK_PROTEIN_PER_LB,
    };
    if diet == DietType::HighProtein {
        base + HIGH_PROTEIN_BONUS_PER_LB
    } else {
        base
    }
}

/// Unrounded daily macros, before the per-meal split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMacros {
    pub bmr: f64,
    pub tdee: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl RawMacros {
    pub fn rounded(&self) -> MacroSet {
        MacroSet {
            calories: self.calories.round() as i64,
            protein_g: self.protein_g.round() as i64,
            carbs_g: self.carbs_g.round() as i64,
            fats_g: self.fats_g.round() as i64,
        }
    }
}

/// Compute unrounded daily macros from inputs.
pub fn raw_macros(inputs: &Inputs) -> RawMacros {
    let height_cm = feet_inches_to_cm(inputs.height_ft, inputs.height_in);
    let weight_kg = lb_to_kg(inputs.weight_lb);

    let bmr = mifflin_st_jeor(weight_kg, height_cm, inputs.age, inputs.sex);
    let tdee = bmr * inputs.activity;
    let calories = goal_calories(tdee, inputs.goal);

    let mut protein_g = protein_per_lb(inputs.goal, inputs.diet_type) * inputs.weight_lb;
    let fats_g = if inputs.diet_type == DietType::LowCarb {
        LOW_CARB_FAT_PER_LB * inputs.weight_lb
    } else {
        FAT_PER_LB * inputs.weight_lb
    };

    let carb_calories =
        (calories - protein_g * KCAL_PER_G_PROTEIN - fats_g * KCAL_PER_G_FAT).max(0.0);
    let mut carbs_g = carb_calories / KCAL_PER_G_CARB;

    if inputs.diet_type == DietType::Vegan {
        carbs_g *= VEGAN_CARB_FACTOR;
        protein_g = protein_g.max(VEGAN_MIN_PROTEIN_PER_LB * inputs.weight_lb);
    }

    RawMacros {
        bmr,
        tdee,
        calories,
        protein_g,
        carbs_g,
        fats_g,
    }
}

/// Daily and per-meal targets for a set of inputs.
pub fn calc_targets(inputs: &Inputs) -> Targets {
    let raw = raw_macros(inputs);
    let targets = Targets::from_daily(raw.rounded(), inputs.meals_per_day);

    debug!(
        bmr = raw.bmr,
        tdee = raw.tdee,
        calories = targets.calories,
        protein_g = targets.protein_g,
        carbs_g = targets.carbs_g,
        fats_g = targets.fats_g,
        "calculated targets"
    );

    targets
}

/// Replace any overridden daily quantity and recompute the per-meal split.
///
/// Override values are applied as given, including zero or negative numbers.
pub fn apply_macro_override(
    targets: &Targets,
    overrides: &MacroOverride,
    meals: MealsPerDay,
) -> Targets {
    let current = targets.daily();
    let daily = MacroSet {
        calories: overrides.calories.unwrap_or(current.calories),
        protein_g: overrides.protein_g.unwrap_or(current.protein_g),
        carbs_g: overrides.carbs_g.unwrap_or(current.carbs_g),
        fats_g: overrides.fats_g.unwrap_or(current.fats_g),
    };
    Targets::from_daily(daily, meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn sample_inputs(goal: Goal, diet: DietType) -> Inputs {
        Inputs {
            goal,
            activity: 1.5,
            meals_per_day: MealsPerDay::Four,
            height_ft: 5.0,
            height_in: 10.0,
            weight_lb: 180.0,
            sex: Sex::Male,
            age: 30,
            diet_type: diet,
            allergies: vec![],
            preferred_protein: NO_PREFERENCE.to_string(),
            avoid_food: NONE_OPTION.to_string(),
        }
    }

    #[test]
    fn test_mifflin_st_jeor() {
        // 10*80 + 6.25*180 - 5*30 + 5 = 1780
        assert_float_absolute_eq!(mifflin_st_jeor(80.0, 180.0, 30, Sex::Male), 1780.0, 1e-9);
        assert_float_absolute_eq!(
            mifflin_st_jeor(80.0, 180.0, 30, Sex::Female),
            1614.0,
            1e-9
        );
    }

    #[test]
    fn test_goal_calories() {
        assert_float_absolute_eq!(goal_calories(2000.0, Goal::Cut), 1700.0, 1e-9);
        assert_float_absolute_eq!(goal_calories(2000.0, Goal::Maintain), 2000.0, 1e-9);
        assert_float_absolute_eq!(goal_calories(2000.0, Goal::Bulk), 2200.0, 1e-9);
    }

    #[test]
    fn test_protein_rates() {
        assert_float_absolute_eq!(protein_per_lb(Goal::Cut, DietType::Standard), 0.9, 1e-9);
        assert_float_absolute_eq!(protein_per_lb(Goal::Bulk, DietType::HighProtein), 0.85, 1e-9);
    }

    #[test]
    fn test_calc_targets_maintain_standard() {
        let inputs = sample_inputs(Goal::Maintain, DietType::Standard);
        let raw = raw_macros(&inputs);

        // bmr = 10*81.6466266 + 6.25*177.8 - 150 + 5 = 1782.716266
        assert_float_absolute_eq!(raw.bmr, 1782.716266, 1e-6);
        let targets = calc_targets(&inputs);
        assert_eq!(targets.calories, 2674);
        assert_eq!(targets.protein_g, 144);
        assert_eq!(targets.fats_g, 54);
        // (2674.074 - 576 - 486) / 4 = 403.02
        assert_eq!(targets.carbs_g, 403);
        assert_eq!(targets.per_meal.calories, 669);
        assert_eq!(targets.per_meal.carbs_g, 101);
    }

    #[test]
    fn test_low_carb_raises_fat() {
        let targets = calc_targets(&sample_inputs(Goal::Maintain, DietType::LowCarb));
        assert_eq!(targets.fats_g, 72);
    }

    #[test]
    fn test_carbs_floor_at_zero() {
        let mut inputs = sample_inputs(Goal::Cut, DietType::Standard);
        inputs.activity = 0.5;
        let targets = calc_targets(&inputs);
        assert_eq!(targets.carbs_g, 0);
        assert_eq!(targets.per_meal.carbs_g, 0);
    }

    #[test]
    fn test_override_replaces_only_given_fields() {
        let targets = calc_targets(&sample_inputs(Goal::Maintain, DietType::Standard));
        let overrides = MacroOverride {
            fats_g: Some(-8),
            ..Default::default()
        };
        let out = apply_macro_override(&targets, &overrides, MealsPerDay::Four);
        assert_eq!(out.fats_g, -8);
        assert_eq!(out.per_meal.fats_g, -2);
        assert_eq!(out.calories, targets.calories);
        assert_eq!(out.per_meal.protein_g, targets.per_meal.protein_g);
    }
}
