#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{BakerError, Result};
pub use models::Ingredient;
pub use state::{RecipeCalculator, SeedConfig};
