mod export;
mod manager;
mod seed;

pub use export::{to_json, write_csv};
pub use manager::RecipeCalculator;
pub use seed::SeedConfig;
