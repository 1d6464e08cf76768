mod export;
mod list;

pub use export::{grocery_to_csv, write_grocery_csv, CSV_HEADER};
pub use list::build_grocery_list;
