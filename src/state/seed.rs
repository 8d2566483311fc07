use crate::calculator::constants::{
    DEFAULT_FLOUR_WEIGHT, EXAMPLE_INGREDIENTS, FLOUR_ID, FLOUR_NAME, FLOUR_PERCENTAGE,
};
use crate::calculator::percentages_from_weights;
use crate::models::Ingredient;

/// How a fresh recipe is built.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Flour weight applied after seeding. Example rows keep their
    /// percentages and are rescaled to it.
    pub flour_weight: f64,
    /// Append the example dough (yeast, water, sugar).
    pub include_examples: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            flour_weight: DEFAULT_FLOUR_WEIGHT,
            include_examples: false,
        }
    }
}

impl SeedConfig {
    /// Default flour plus the example dough.
    pub fn with_examples() -> Self {
        Self {
            include_examples: true,
            ..Self::default()
        }
    }

    /// Rows at the default flour weight, percentages already derived.
    pub fn seed_ingredients(&self) -> Vec<Ingredient> {
        let mut rows = vec![Ingredient::new(
            FLOUR_ID,
            FLOUR_NAME,
            DEFAULT_FLOUR_WEIGHT,
            FLOUR_PERCENTAGE,
        )];

        if self.include_examples {
            rows.extend(
                EXAMPLE_INGREDIENTS
                    .iter()
                    .zip(FLOUR_ID + 1..)
                    .map(|((name, grams), id)| Ingredient::new(id, *name, *grams, 0.0)),
            );
        }

        percentages_from_weights(&rows)
    }
}
