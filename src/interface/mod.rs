pub mod options;
pub mod prompts;
pub mod render;

pub use options::{normalize_inputs, resolve_option};
pub use prompts::{collect_profile, prompt_yes_no};
pub use render::{display_day_plan, display_grocery_list, display_targets, display_week_plan};
