mod inputs;
mod plan;
mod targets;

pub use inputs::{DietType, Goal, Inputs, MealsPerDay, Sex};
pub use plan::{DayPlan, GroceryItem, MealRow, MealSlot, PlanMeta, WeekDay, WeekPlan};
pub use targets::{MacroOverride, MacroSet, Targets};
