use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Baker's percentage calculator: keeps ingredient weights in step with flour.
#[derive(Parser, Debug)]
#[command(name = "bakers_percentage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Start with the example dough (yeast, water, sugar).
    #[arg(short, long)]
    pub example: bool,

    /// Starting flour weight in grams. Invalid input counts as 0.
    #[arg(short, long, default_value = "100")]
    pub flour: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit the recipe interactively.
    Edit,

    /// Print the recipe.
    Show {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Set the flour weight and print the rescaled recipe.
    Scale {
        /// New flour weight in grams.
        grams: String,
    },

    /// Write the recipe to a CSV file.
    Export {
        /// Output path.
        #[arg(short, long, default_value = "recipe.csv")]
        output: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Edit
    }
}
