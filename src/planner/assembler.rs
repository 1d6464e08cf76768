use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::grocery::build_grocery_list;
use crate::models::{
    DayPlan, DietType, Inputs, MealRow, MealSlot, PlanMeta, Targets, WeekDay, WeekPlan,
};
use crate::planner::constants::*;
use crate::planner::pool::protein_choices;
use crate::planner::portions::portions_for_meal;
use crate::planner::restrictions::{has_restriction, is_avoided, unique_restrictions};
use crate::planner::selector::SeededSelector;
use crate::planner::targets::calc_targets;

/// Days in a week plan.
pub const DAYS_PER_WEEK: u8 = 7;

/// Range of the clock-derived seed used for ad-hoc day plans.
const CLOCK_SEED_MODULUS: u128 = 1000;

/// Foods chosen for every slot of one day, before slot ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFoods {
    pub breakfast: Vec<&'static str>,
    pub snack1: Vec<&'static str>,
    pub lunch: Vec<&'static str>,
    pub snack2: Vec<&'static str>,
    pub dinner: Vec<&'static str>,
}

impl DayFoods {
    pub fn slot(&self, slot: MealSlot) -> &[&'static str] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Snack1 => &self.snack1,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack2 => &self.snack2,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

fn carb_sources(diet: DietType) -> &'static [&'static str] {
    if diet == DietType::LowCarb {
        &LOW_CARB_CARBS
    } else {
        &STARCHY_CARBS
    }
}

/// Choose one day's foods. Picks are drawn in a fixed order so a seed fully determines
/// the day: three proteins, three carbs, then the snack fat.
pub fn pick_day_foods(inputs: &Inputs, restrictions: &[String], seed: i64) -> DayFoods {
    let diet = inputs.diet_type;
    let avoid = inputs.avoid_food.as_str();
    let pool = protein_choices(diet, restrictions, &inputs.preferred_protein, avoid);
    let carbs = carb_sources(diet);
    let mut selector = SeededSelector::new(seed);

    let mut pick_protein = || selector.pick(&pool).unwrap_or(GENERIC_PROTEIN);
    let protein_b = pick_protein();
    let protein_l = pick_protein();
    let protein_d = pick_protein();

    let supplement = if diet.is_plant_based() {
        PLANT_PROTEIN
    } else {
        WHEY_PROTEIN
    };
    let dairy_free = has_restriction(restrictions, "Dairy-Free") || diet == DietType::Vegan;
    let snack2_protein = if dairy_free { PLANT_PROTEIN } else { GREEK_YOGURT };

    let mut pick_carb = || selector.pick(carbs).unwrap_or(carbs[0]);
    let carb1 = pick_carb();
    let carb2 = pick_carb();
    let carb3 = pick_carb();

    let nut_free = has_restriction(restrictions, "Nut-Free") || inputs.avoid_food == "Nuts";
    let snack_fat = if nut_free {
        OLIVE_OIL
    } else {
        selector.pick(&FAT_SOURCES).unwrap_or(OLIVE_OIL)
    };

    let keep = |foods: Vec<&'static str>| -> Vec<&'static str> {
        foods.into_iter().filter(|f| !is_avoided(f, avoid)).collect()
    };

    DayFoods {
        breakfast: keep(vec![carb1, protein_b, "berries", AVOCADO]),
        snack1: keep(vec![supplement, "banana", snack_fat]),
        lunch: keep(vec![protein_l, carb2, "mixed veggies", OLIVE_OIL]),
        snack2: keep(vec![snack2_protein, "fruit"]),
        dinner: keep(vec![protein_d, carb3, "veggies", OLIVE_OIL]),
    }
}

/// Meal rows for one day, ordered by the meal count, all sharing the per-meal portions.
pub fn build_rows(inputs: &Inputs, targets: &Targets, foods: &DayFoods) -> Vec<MealRow> {
    let portions = portions_for_meal(&targets.per_meal, inputs.diet_type);
    MealSlot::order(inputs.meals_per_day)
        .iter()
        .map(|&slot| MealRow::new(slot, foods.slot(slot), portions.clone()))
        .collect()
}

/// Day plan against explicit targets, e.g. after a macro override.
pub fn generate_day_plan_with_targets(inputs: &Inputs, targets: Targets, seed: i64) -> DayPlan {
    let restrictions = unique_restrictions(&inputs.allergies);
    let foods = pick_day_foods(inputs, &restrictions, seed);
    let rows = build_rows(inputs, &targets, &foods);

    debug!(seed, rows = rows.len(), "generated day plan");

    DayPlan {
        targets,
        rows,
        meta: PlanMeta { restrictions },
    }
}

/// Reproducible day plan for an explicit seed.
pub fn generate_day_plan_with_seed(inputs: &Inputs, seed: i64) -> DayPlan {
    generate_day_plan_with_targets(inputs, calc_targets(inputs), seed)
}

/// Seed derived from the wall clock (milliseconds mod 1000).
pub fn clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_millis() % CLOCK_SEED_MODULUS) as i64)
        .unwrap_or(0)
}

/// "Today's plan": seeded from the clock, so consecutive calls may differ.
pub fn generate_day_plan(inputs: &Inputs) -> DayPlan {
    generate_day_plan_with_seed(inputs, clock_seed())
}

/// Seven-day plan against explicit targets. Day `d` is seeded with `d + 1`.
pub fn generate_week_plan_with_targets(inputs: &Inputs, targets: Targets) -> WeekPlan {
    let restrictions = unique_restrictions(&inputs.allergies);

    let week: Vec<WeekDay> = (0..DAYS_PER_WEEK)
        .map(|day_index| {
            let foods = pick_day_foods(inputs, &restrictions, i64::from(day_index) + 1);
            WeekDay {
                day_index,
                restrictions: restrictions.clone(),
                rows: build_rows(inputs, &targets, &foods),
            }
        })
        .collect();

    let grocery = build_grocery_list(week.iter().flat_map(|day| day.rows.iter()));
    debug!(items = grocery.len(), "generated week plan");

    WeekPlan {
        targets,
        week,
        grocery,
        meta: PlanMeta { restrictions },
    }
}

/// Reproducible seven-day plan with grocery list.
pub fn generate_week_plan(inputs: &Inputs) -> WeekPlan {
    generate_week_plan_with_targets(inputs, calc_targets(inputs))
}
