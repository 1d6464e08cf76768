use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{DietType, Goal, Inputs, MealsPerDay, Sex};
use crate::planner::constants::{
    ALLERGY_OPTIONS, AVOID_FOOD_OPTIONS, DEFAULT_AGE, MAX_ALLERGIES, PREFERRED_PROTEIN_OPTIONS,
};

/// Activity presets shown in the wizard, with their TDEE multipliers.
const ACTIVITY_LEVELS: [(&str, f64); 5] = [
    ("Sedentary (little or no exercise)", 1.2),
    ("Light (1-3 days/week)", 1.375),
    ("Moderate (3-5 days/week)", 1.55),
    ("Very active (6-7 days/week)", 1.725),
    ("Athlete (2x/day)", 1.9),
];

/// Prompt for a number with a default, rejecting negatives.
fn prompt_number<T>(prompt: &str, default: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: T = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))?;

    if value < T::default() {
        return Err(PlanError::InvalidInput(format!(
            "{} must not be negative",
            prompt
        )));
    }
    Ok(value)
}

pub fn prompt_goal() -> Result<Goal> {
    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&["Cut (lose fat)", "Maintain", "Bulk (gain muscle)"])
        .default(1)
        .interact()?;

    Ok(match selection {
        0 => Goal::Cut,
        2 => Goal::Bulk,
        _ => Goal::Maintain,
    })
}

pub fn prompt_activity() -> Result<f64> {
    let labels: Vec<&str> = ACTIVITY_LEVELS.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt("How active are you?")
        .items(&labels)
        .default(2)
        .interact()?;

    Ok(ACTIVITY_LEVELS[selection].1)
}

pub fn prompt_meals_per_day() -> Result<MealsPerDay> {
    let selection = Select::new()
        .with_prompt("Meals per day")
        .items(&["3", "4", "5"])
        .default(1)
        .interact()?;

    Ok(match selection {
        0 => MealsPerDay::Three,
        2 => MealsPerDay::Five,
        _ => MealsPerDay::Four,
    })
}

pub fn prompt_sex() -> Result<Sex> {
    let selection = Select::new()
        .with_prompt("Sex (used for BMR)")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;

    Ok(if selection == 1 { Sex::Female } else { Sex::Male })
}

pub fn prompt_diet_type() -> Result<DietType> {
    let labels: Vec<&str> = DietType::ALL.iter().map(|d| d.label()).collect();
    let selection = Select::new()
        .with_prompt("Diet type")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(DietType::ALL[selection])
}

/// Up to three allergy selections; "None" is accepted and ignored downstream.
pub fn prompt_allergies() -> Result<Vec<String>> {
    let mut allergies = Vec::new();

    for i in 0..MAX_ALLERGIES {
        let selection = Select::new()
            .with_prompt(format!("Allergy / restriction {} of {}", i + 1, MAX_ALLERGIES))
            .items(&ALLERGY_OPTIONS)
            .default(0)
            .interact()?;

        allergies.push(ALLERGY_OPTIONS[selection].to_string());
    }

    Ok(allergies)
}

pub fn prompt_preferred_protein() -> Result<String> {
    let selection = Select::new()
        .with_prompt("Preferred protein")
        .items(&PREFERRED_PROTEIN_OPTIONS)
        .default(0)
        .interact()?;

    Ok(PREFERRED_PROTEIN_OPTIONS[selection].to_string())
}

pub fn prompt_avoid_food() -> Result<String> {
    let selection = Select::new()
        .with_prompt("Any food to avoid?")
        .items(&AVOID_FOOD_OPTIONS)
        .default(0)
        .interact()?;

    Ok(AVOID_FOOD_OPTIONS[selection].to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through every profile field.
pub fn collect_profile() -> Result<Inputs> {
    let goal = prompt_goal()?;
    let activity = prompt_activity()?;
    let meals_per_day = prompt_meals_per_day()?;
    let height_ft: f64 = prompt_number("Height (feet)", "5")?;
    let height_in: f64 = prompt_number("Height (inches)", "10")?;
    let weight_lb: f64 = prompt_number("Weight (lb)", "170")?;
    let sex = prompt_sex()?;
    let age: u32 = prompt_number("Age", &DEFAULT_AGE.to_string())?;
    if age == 0 {
        return Err(PlanError::InvalidInput("Age must be positive".to_string()));
    }
    let diet_type = prompt_diet_type()?;
    let allergies = prompt_allergies()?;
    let preferred_protein = prompt_preferred_protein()?;
    let avoid_food = prompt_avoid_food()?;

    Ok(Inputs {
        goal,
        activity,
        meals_per_day,
        height_ft,
        height_in,
        weight_lb,
        sex,
        age,
        diet_type,
        allergies,
        preferred_protein,
        avoid_food,
    })
}
