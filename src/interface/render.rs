use crate::models::{DayPlan, GroceryItem, MealRow, Targets, WeekPlan};

const DAY_NAMES: [&str; 7] = [
    "Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6", "Day 7",
];

/// Display daily and per-meal targets.
pub fn display_targets(targets: &Targets) {
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("{:<10} {:>8} {:>10}", "", "Daily", "Per meal");
    println!(
        "{:<10} {:>8} {:>10}",
        "Calories", targets.calories, targets.per_meal.calories
    );
    println!(
        "{:<10} {:>7}g {:>9}g",
        "Protein", targets.protein_g, targets.per_meal.protein_g
    );
    println!(
        "{:<10} {:>7}g {:>9}g",
        "Carbs", targets.carbs_g, targets.per_meal.carbs_g
    );
    println!(
        "{:<10} {:>7}g {:>9}g",
        "Fats", targets.fats_g, targets.per_meal.fats_g
    );
    println!();
}

fn display_rows(rows: &[MealRow]) {
    let width = rows.iter().map(|r| r.meal.len()).max().unwrap_or(9);

    for row in rows {
        let foods = if row.foods.is_empty() {
            "(nothing left after filters)"
        } else {
            row.foods.as_str()
        };
        println!("  {:<width$}  {}", row.meal, foods, width = width);
        println!("  {:<width$}  {}", "", row.portions, width = width);
    }
}

fn display_restrictions(restrictions: &[String]) {
    if !restrictions.is_empty() {
        println!("Restrictions: {}", restrictions.join(", "));
    }
}

/// Display a single day plan.
pub fn display_day_plan(plan: &DayPlan) {
    display_targets(&plan.targets);
    println!("=== Today's Plan ===");
    println!();
    display_rows(&plan.rows);
    println!();
    display_restrictions(&plan.meta.restrictions);
}

/// Display a week plan followed by its grocery list.
pub fn display_week_plan(plan: &WeekPlan) {
    display_targets(&plan.targets);

    for day in &plan.week {
        let name = DAY_NAMES
            .get(day.day_index as usize)
            .copied()
            .unwrap_or("Day");
        println!("=== {} ===", name);
        display_rows(&day.rows);
        println!();
    }

    display_restrictions(&plan.meta.restrictions);
    display_grocery_list(&plan.grocery);
}

/// Display a grocery list with counts.
pub fn display_grocery_list(items: &[GroceryItem]) {
    if items.is_empty() {
        println!("Grocery list: (none)");
        return;
    }

    println!();
    println!("=== Grocery List ({} items) ===", items.len());
    println!();

    let width = items.iter().map(|i| i.item.len()).max().unwrap_or(10);
    for item in items {
        println!("  {:<width$}  x{}", item.item, item.count, width = width);
    }

    println!();
}
