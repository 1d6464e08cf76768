use std::collections::HashMap;

use crate::models::{GroceryItem, MealRow};

/// Count every food token across meal rows.
///
/// Each row's food list is split on commas and trimmed; empty tokens are skipped.
/// The result is sorted by count descending, ties in first-seen order.
pub fn build_grocery_list<'a, I>(rows: I) -> Vec<GroceryItem>
where
    I: IntoIterator<Item = &'a MealRow>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut items: Vec<GroceryItem> = Vec::new();

    for row in rows {
        for token in row.foods.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match index.get(token) {
                Some(&i) => items[i].count += 1,
                None => {
                    index.insert(token.to_string(), items.len());
                    items.push(GroceryItem::new(token, 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    items.sort_by(|a, b| b.count.cmp(&a.count));
    items
}
