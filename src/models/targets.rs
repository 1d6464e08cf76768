use serde::{Deserialize, Serialize};

use crate::models::MealsPerDay;

/// Calories and macro grams, already rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroSet {
    pub calories: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fats_g: i64,
}

impl MacroSet {
    /// Split each daily quantity into one meal's share, rounding each field on its own.
    pub fn per_meal(&self, meals: MealsPerDay) -> MacroSet {
        MacroSet {
            calories: meals.per_meal(self.calories),
            protein_g: meals.per_meal(self.protein_g),
            carbs_g: meals.per_meal(self.carbs_g),
            fats_g: meals.per_meal(self.fats_g),
        }
    }
}

/// Daily targets plus the per-meal breakdown.
///
/// `per_meal` is rounded independently per field, so `per_meal * meals` may drift from
/// the daily value by up to `meals - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    pub calories: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fats_g: i64,
    pub per_meal: MacroSet,
}

impl Targets {
    pub fn from_daily(daily: MacroSet, meals: MealsPerDay) -> Self {
        Self {
            calories: daily.calories,
            protein_g: daily.protein_g,
            carbs_g: daily.carbs_g,
            fats_g: daily.fats_g,
            per_meal: daily.per_meal(meals),
        }
    }

    pub fn daily(&self) -> MacroSet {
        MacroSet {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fats_g: self.fats_g,
        }
    }
}

/// Manual replacement for any subset of the daily quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroOverride {
    #[serde(default)]
    pub calories: Option<i64>,
    #[serde(default)]
    pub protein_g: Option<i64>,
    #[serde(default)]
    pub carbs_g: Option<i64>,
    #[serde(default)]
    pub fats_g: Option<i64>,
}

impl MacroOverride {
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein_g.is_none()
            && self.carbs_g.is_none()
            && self.fats_g.is_none()
    }
}
