use clap::Parser;
use tracing::info;

use bakers_percentage_rs::calculator::parse_weight;
use bakers_percentage_rs::cli::{Cli, Command};
use bakers_percentage_rs::error::Result;
use bakers_percentage_rs::interface::{display_recipe, edit_recipe};
use bakers_percentage_rs::state::{to_json, write_csv, RecipeCalculator, SeedConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = SeedConfig {
        flour_weight: parse_weight(&cli.flour),
        include_examples: cli.example,
    };
    let mut calculator = RecipeCalculator::new(&config);
    info!(rows = calculator.len(), "seeded recipe");

    match cli.command.unwrap_or_default() {
        Command::Edit => edit_recipe(&mut calculator),
        Command::Show { json } => cmd_show(&calculator, json),
        Command::Scale { grams } => cmd_scale(&mut calculator, &grams),
        Command::Export { output } => {
            write_csv(calculator.ingredients(), &output)?;
            println!("Recipe written to {}", output.display());
            Ok(())
        }
    }
}

/// Print the recipe as a table or JSON.
fn cmd_show(calculator: &RecipeCalculator, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(calculator.ingredients())?);
    } else {
        display_recipe(calculator);
    }
    Ok(())
}

/// Rescale the recipe to a new flour weight.
fn cmd_scale(calculator: &mut RecipeCalculator, grams: &str) -> Result<()> {
    let flour_id = calculator.flour().id;
    let weight = parse_weight(grams);

    if weight == 0.0 && grams.trim().parse::<f64>().is_err() {
        eprintln!("'{}' is not a number, using 0 g of flour.", grams);
    }

    calculator.set_weight(flour_id, weight);
    display_recipe(calculator);
    Ok(())
}
