pub mod calculations;
pub mod constants;
pub mod input;

pub use calculations::{
    is_consistent, percentage_of, percentages_from_weights, total_percentage, total_weight,
    weight_from_percentage, weights_from_percentages,
};
pub use constants::*;
pub use input::{normalize_weight, parse_weight};
