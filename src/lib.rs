pub mod cli;
pub mod error;
pub mod grocery;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlanError, Result};
pub use grocery::{build_grocery_list, grocery_to_csv};
pub use models::{
    DayPlan, DietType, Goal, GroceryItem, Inputs, MacroOverride, MealRow, MealsPerDay, Sex,
    Targets, WeekPlan,
};
pub use planner::{
    apply_macro_override, calc_targets, generate_day_plan, generate_day_plan_with_seed,
    generate_week_plan,
};
