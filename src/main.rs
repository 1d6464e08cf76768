use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use macro_meal_planner_rs::cli::{Cli, Command, OverrideArgs};
use macro_meal_planner_rs::error::Result;
use macro_meal_planner_rs::grocery::write_grocery_csv;
use macro_meal_planner_rs::interface::{
    collect_profile, display_day_plan, display_grocery_list, display_targets, display_week_plan,
    prompt_yes_no,
};
use macro_meal_planner_rs::models::{Inputs, Targets};
use macro_meal_planner_rs::planner::assembler::clock_seed;
use macro_meal_planner_rs::planner::{
    apply_macro_override, calc_targets, generate_day_plan_with_targets,
    generate_week_plan_with_targets,
};
use macro_meal_planner_rs::state::{load_profile, save_profile};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so plan output on stdout stays clean. Defaults to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Setup => cmd_setup(&cli.profile),
        Command::Targets { overrides, json } => cmd_targets(&cli.profile, &overrides, json),
        Command::Day {
            seed,
            overrides,
            json,
        } => cmd_day(&cli.profile, seed, &overrides, json),
        Command::Week {
            overrides,
            grocery_csv,
            json,
        } => cmd_week(&cli.profile, &overrides, grocery_csv.as_deref(), json),
        Command::Grocery { csv } => cmd_grocery(&cli.profile, csv.as_deref()),
    }
}

/// Targets for a profile with any administrative overrides applied.
fn resolve_targets(inputs: &Inputs, overrides: &OverrideArgs) -> Targets {
    let targets = calc_targets(inputs);
    let overrides = overrides.to_override();
    if overrides.is_empty() {
        return targets;
    }

    info!(?overrides, "applying macro override");
    apply_macro_override(&targets, &overrides, inputs.meals_per_day)
}

/// Interactively build and save a profile.
fn cmd_setup(path: &Path) -> Result<()> {
    if path.exists() {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", path.display()),
            false,
        )?;
        if !overwrite {
            println!("Keeping existing profile.");
            return Ok(());
        }
    }

    let inputs = collect_profile()?;
    save_profile(path, &inputs)?;
    println!("Profile saved to {}.", path.display());

    display_targets(&calc_targets(&inputs));
    Ok(())
}

/// Show daily and per-meal targets.
fn cmd_targets(path: &Path, overrides: &OverrideArgs, json: bool) -> Result<()> {
    let inputs = load_profile(path)?;
    let targets = resolve_targets(&inputs, overrides);

    if json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
    } else {
        display_targets(&targets);
    }
    Ok(())
}

/// Generate one day's plan.
fn cmd_day(path: &Path, seed: Option<i64>, overrides: &OverrideArgs, json: bool) -> Result<()> {
    let inputs = load_profile(path)?;
    let targets = resolve_targets(&inputs, overrides);
    let seed = seed.unwrap_or_else(clock_seed);
    info!(seed, "generating day plan");

    let plan = generate_day_plan_with_targets(&inputs, targets, seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_day_plan(&plan);
    }
    Ok(())
}

/// Generate the seven-day plan, optionally exporting its grocery list.
fn cmd_week(
    path: &Path,
    overrides: &OverrideArgs,
    grocery_csv: Option<&Path>,
    json: bool,
) -> Result<()> {
    let inputs = load_profile(path)?;
    let targets = resolve_targets(&inputs, overrides);
    let plan = generate_week_plan_with_targets(&inputs, targets);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_week_plan(&plan);
    }

    if let Some(csv_path) = grocery_csv {
        write_grocery_csv(csv_path, &plan.grocery)?;
        if !json {
            println!("Grocery list written to {}.", csv_path.display());
        }
    }
    Ok(())
}

/// Show or export the week's grocery list.
fn cmd_grocery(path: &Path, csv: Option<&Path>) -> Result<()> {
    let inputs = load_profile(path)?;
    let plan = generate_week_plan_with_targets(&inputs, calc_targets(&inputs));

    match csv {
        Some(csv_path) => {
            write_grocery_csv(csv_path, &plan.grocery)?;
            println!("Grocery list written to {}.", csv_path.display());
        }
        None => display_grocery_list(&plan.grocery),
    }
    Ok(())
}
