use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::planner::constants::{DEFAULT_AGE, NONE_OPTION, NO_PREFERENCE};

/// Body-composition goal driving the calorie adjustment and protein rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Cut,
    Maintain,
    Bulk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Standard,
    HighProtein,
    LowCarb,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 5] = [
        DietType::Standard,
        DietType::HighProtein,
        DietType::LowCarb,
        DietType::Vegetarian,
        DietType::Vegan,
    ];

    /// Vegetarian and vegan diets get scoop-based protein portions and plant supplements.
    pub fn is_plant_based(self) -> bool {
        matches!(self, DietType::Vegetarian | DietType::Vegan)
    }

    pub fn label(self) -> &'static str {
        match self {
            DietType::Standard => "standard",
            DietType::HighProtein => "high_protein",
            DietType::LowCarb => "low_carb",
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
        }
    }
}

/// Number of meals per day. Serialized as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MealsPerDay {
    Three,
    Four,
    Five,
}

impl MealsPerDay {
    pub fn count(self) -> u8 {
        match self {
            MealsPerDay::Three => 3,
            MealsPerDay::Four => 4,
            MealsPerDay::Five => 5,
        }
    }

    /// Divide a daily quantity into one meal's share, rounded half away from zero.
    pub fn per_meal(self, daily: i64) -> i64 {
        (daily as f64 / f64::from(self.count())).round() as i64
    }
}

impl TryFrom<u8> for MealsPerDay {
    type Error = PlanError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(MealsPerDay::Three),
            4 => Ok(MealsPerDay::Four),
            5 => Ok(MealsPerDay::Five),
            other => Err(PlanError::InvalidInput(format!(
                "meals per day must be 3, 4 or 5 (got {})",
                other
            ))),
        }
    }
}

impl From<MealsPerDay> for u8 {
    fn from(meals: MealsPerDay) -> Self {
        meals.count()
    }
}

fn default_age() -> u32 {
    DEFAULT_AGE
}

fn default_preferred_protein() -> String {
    NO_PREFERENCE.to_string()
}

fn default_avoid_food() -> String {
    NONE_OPTION.to_string()
}

/// A validated planning request.
///
/// Option labels (`allergies`, `preferred_protein`, `avoid_food`) are expected to come
/// from the fixed option sets in `planner::constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    pub goal: Goal,

    /// TDEE multiplier, typically 1.2 to 1.9.
    pub activity: f64,

    pub meals_per_day: MealsPerDay,

    pub height_ft: f64,

    pub height_in: f64,

    pub weight_lb: f64,

    #[serde(default)]
    pub sex: Sex,

    #[serde(default = "default_age")]
    pub age: u32,

    pub diet_type: DietType,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default = "default_preferred_protein")]
    pub preferred_protein: String,

    #[serde(default = "default_avoid_food")]
    pub avoid_food: String,
}
