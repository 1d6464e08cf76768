pub mod assembler;
pub mod constants;
pub mod conversions;
pub mod pool;
pub mod portions;
pub mod restrictions;
pub mod selector;
pub mod targets;

pub use assembler::{
    generate_day_plan, generate_day_plan_with_seed, generate_day_plan_with_targets,
    generate_week_plan, generate_week_plan_with_targets, pick_day_foods, DayFoods,
    DAYS_PER_WEEK,
};
pub use constants::{ALLERGY_OPTIONS, AVOID_FOOD_OPTIONS, PREFERRED_PROTEIN_OPTIONS};
pub use pool::{apply_preference, build_protein_pool, protein_choices};
pub use portions::portions_for_meal;
pub use restrictions::{has_restriction, is_avoided, unique_restrictions, FoodTag};
pub use selector::SeededSelector;
pub use targets::{apply_macro_override, calc_targets};
