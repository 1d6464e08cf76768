use crate::planner::constants::NONE_OPTION;

/// Ingredient category a food name can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodTag {
    Dairy,
    Gluten,
    Nut,
    Soy,
    Fish,
    Shellfish,
    Egg,
    Rice,
    Potato,
    Legume,
}

impl FoodTag {
    pub const ALL: [FoodTag; 10] = [
        FoodTag::Dairy,
        FoodTag::Gluten,
        FoodTag::Nut,
        FoodTag::Soy,
        FoodTag::Fish,
        FoodTag::Shellfish,
        FoodTag::Egg,
        FoodTag::Rice,
        FoodTag::Potato,
        FoodTag::Legume,
    ];

    /// Lowercase keywords that assign this tag to a food name.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            FoodTag::Dairy => &["yogurt", "milk", "cheese", "whey", "cottage"],
            FoodTag::Gluten => &["bread", "pasta", "wrap", "tortilla"],
            FoodTag::Nut => &["peanut", "almond", "nuts"],
            FoodTag::Soy => &["tofu", "tempeh", "soy"],
            FoodTag::Fish => &["salmon", "tuna", "fish"],
            FoodTag::Shellfish => &["shrimp", "shellfish"],
            FoodTag::Egg => &["egg"],
            FoodTag::Rice => &["rice"],
            FoodTag::Potato => &["potato"],
            FoodTag::Legume => &["lentil", "beans", "chickpeas"],
        }
    }

    pub fn matches(self, food: &str) -> bool {
        let food = food.to_lowercase();
        self.keywords().iter().any(|k| food.contains(k))
    }
}

/// Categories a food name belongs to.
pub fn food_tags(food: &str) -> Vec<FoodTag> {
    FoodTag::ALL
        .into_iter()
        .filter(|tag| tag.matches(food))
        .collect()
}

/// Categories excluded by an avoid-food label. Labels without a category
/// ("Red meat", "Oats") only match by name.
pub fn avoid_tags(avoid: &str) -> &'static [FoodTag] {
    match avoid.to_lowercase().as_str() {
        "dairy" => &[FoodTag::Dairy],
        "gluten" => &[FoodTag::Gluten],
        "nuts" => &[FoodTag::Nut],
        "soy" => &[FoodTag::Soy],
        "fish" => &[FoodTag::Fish, FoodTag::Shellfish],
        "eggs" => &[FoodTag::Egg],
        "rice" => &[FoodTag::Rice],
        "potatoes" => &[FoodTag::Potato],
        "legumes" => &[FoodTag::Legume],
        _ => &[],
    }
}

/// Categories removed from the protein pool by an allergy label.
pub fn restriction_tags(restriction: &str) -> &'static [FoodTag] {
    match restriction {
        "Dairy-Free" => &[FoodTag::Dairy],
        "Egg-Free" => &[FoodTag::Egg],
        "Soy-Free" => &[FoodTag::Soy],
        "Fish-Free" | "Shellfish-Free" => &[FoodTag::Fish, FoodTag::Shellfish],
        _ => &[],
    }
}

/// Drop the "None" sentinel and blanks, keeping the first occurrence of each label.
pub fn unique_restrictions<S: AsRef<str>>(selections: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for label in selections.iter().map(AsRef::as_ref) {
        if label.is_empty() || label == NONE_OPTION {
            continue;
        }
        if !out.iter().any(|r| r == label) {
            out.push(label.to_string());
        }
    }
    out
}

pub fn has_restriction(restrictions: &[String], name: &str) -> bool {
    restrictions.iter().any(|r| r == name)
}

/// Whether a food item is excluded by an avoid-food label.
///
/// Matches the label as a case-insensitive substring of the food name, or by shared
/// category. "None" and empty labels never avoid anything.
pub fn is_avoided(food: &str, avoid: &str) -> bool {
    if avoid.is_empty() || avoid == NONE_OPTION {
        return false;
    }
    if food.to_lowercase().contains(&avoid.to_lowercase()) {
        return true;
    }
    avoid_tags(avoid).iter().any(|tag| tag.matches(food))
}
