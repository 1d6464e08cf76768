use serde::{Deserialize, Serialize};

use crate::models::{MealsPerDay, Targets};

/// A slot in the day. Both snacks render under the same "Snack" label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Snack1,
    Lunch,
    Snack2,
    Dinner,
}

impl MealSlot {
    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack1 | MealSlot::Snack2 => "Snack",
        }
    }

    /// Slots served for a given meal count, in eating order.
    pub fn order(meals: MealsPerDay) -> &'static [MealSlot] {
        match meals {
            MealsPerDay::Three => &[MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner],
            MealsPerDay::Four => &[
                MealSlot::Breakfast,
                MealSlot::Snack1,
                MealSlot::Lunch,
                MealSlot::Dinner,
            ],
            MealsPerDay::Five => &[
                MealSlot::Breakfast,
                MealSlot::Snack1,
                MealSlot::Lunch,
                MealSlot::Snack2,
                MealSlot::Dinner,
            ],
        }
    }
}

/// One rendered meal: label, comma-joined foods and portion guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRow {
    pub meal: String,
    pub foods: String,
    pub portions: String,
}

impl MealRow {
    pub fn new(slot: MealSlot, foods: &[&str], portions: String) -> Self {
        Self {
            meal: slot.label().to_string(),
            foods: foods.join(", "),
            portions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanMeta {
    /// Allergy selections with the "None" sentinel and duplicates removed.
    pub restrictions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub targets: Targets,
    pub rows: Vec<MealRow>,
    pub meta: PlanMeta,
}

/// One day inside a week plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    /// 0 through 6.
    pub day_index: u8,
    pub restrictions: Vec<String>,
    pub rows: Vec<MealRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub targets: Targets,
    pub week: Vec<WeekDay>,
    pub grocery: Vec<GroceryItem>,
    pub meta: PlanMeta,
}

impl WeekPlan {
    /// All meal rows of the week, day by day.
    pub fn rows(&self) -> impl Iterator<Item = &MealRow> {
        self.week.iter().flat_map(|day| day.rows.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub item: String,
    pub count: u32,
}

impl GroceryItem {
    pub fn new(item: impl Into<String>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }
}
