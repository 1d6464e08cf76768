use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::MacroOverride;

/// Macro Meal Planner: daily macro targets, weekly meal plans and grocery lists.
#[derive(Parser, Debug)]
#[command(name = "macro_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, global = true, default_value = "profile.json")]
    pub profile: PathBuf,
}

/// Manual daily macro overrides applied before display or generation.
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Override daily calories.
    #[arg(long)]
    pub calories: Option<i64>,

    /// Override daily protein grams.
    #[arg(long)]
    pub protein: Option<i64>,

    /// Override daily carb grams.
    #[arg(long)]
    pub carbs: Option<i64>,

    /// Override daily fat grams.
    #[arg(long)]
    pub fats: Option<i64>,
}

impl OverrideArgs {
    pub fn to_override(&self) -> MacroOverride {
        MacroOverride {
            calories: self.calories,
            protein_g: self.protein,
            carbs_g: self.carbs,
            fats_g: self.fats,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a profile interactively and save it.
    Setup,

    /// Show daily and per-meal macro targets.
    Targets {
        #[command(flatten)]
        overrides: OverrideArgs,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Generate a plan for one day.
    Day {
        /// Seed for food selection (defaults to a clock-derived seed).
        #[arg(long)]
        seed: Option<i64>,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Generate a reproducible seven-day plan with a grocery list.
    Week {
        #[command(flatten)]
        overrides: OverrideArgs,

        /// Also write the grocery list to this CSV file.
        #[arg(long)]
        grocery_csv: Option<PathBuf>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show the week's grocery list, or export it as CSV.
    Grocery {
        /// Write CSV to this file instead of printing a list.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Day {
            seed: None,
            overrides: OverrideArgs::default(),
            json: false,
        }
    }
}
