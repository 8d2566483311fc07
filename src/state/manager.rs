use tracing::{debug, info};

use crate::calculator::constants::NEW_INGREDIENT_NAME;
use crate::calculator::{
    normalize_weight, percentage_of, total_percentage, total_weight, weights_from_percentages,
};
use crate::models::Ingredient;
use crate::state::SeedConfig;

/// Owns the recipe rows and keeps weights and percentages in step.
///
/// Row 0 is always flour. Every mutation leaves the list consistent: each
/// dependent row's percentage equals its weight over the flour weight,
/// times 100.
#[derive(Debug, Clone)]
pub struct RecipeCalculator {
    ingredients: Vec<Ingredient>,
    /// Next id to hand out. Only ever grows.
    next_id: u64,
}

impl Default for RecipeCalculator {
    fn default() -> Self {
        Self::new(&SeedConfig::default())
    }
}

impl RecipeCalculator {
    /// Create a calculator seeded according to `config`.
    pub fn new(config: &SeedConfig) -> Self {
        let ingredients = config.seed_ingredients();
        let next_id = ingredients.iter().map(|i| i.id).max().unwrap_or(0) + 1;

        let mut calculator = Self {
            ingredients,
            next_id,
        };
        let flour_id = calculator.flour().id;
        calculator.set_weight(flour_id, config.flour_weight);
        calculator
    }

    /// Current rows, flour first.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// The flour reference row.
    pub fn flour(&self) -> &Ingredient {
        // The list is never emptied.
        &self.ingredients[0]
    }

    /// Look up a row by id.
    pub fn get(&self, id: u64) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Whether `id` is the flour row.
    pub fn is_flour(&self, id: u64) -> bool {
        self.flour().id == id
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Always false; the flour row cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Total dough weight in grams.
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.ingredients)
    }

    /// Total formula percentage, flour included.
    pub fn total_percentage(&self) -> f64 {
        total_percentage(&self.ingredients)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.ingredients.iter().position(|i| i.id == id)
    }

    /// Rename a dependent row. Flour and unknown ids are left alone.
    ///
    /// Returns whether the list changed.
    pub fn rename_ingredient(&mut self, id: u64, name: &str) -> bool {
        match self.position(id) {
            Some(0) => {
                debug!(id, "ignoring rename of flour");
                false
            }
            Some(pos) => {
                self.ingredients[pos].name = name.to_string();
                info!(id, name, "renamed ingredient");
                true
            }
            None => {
                debug!(id, "ignoring rename of unknown ingredient");
                false
            }
        }
    }

    /// Set a row's weight and restore consistency.
    ///
    /// Flour: every dependent weight is rescaled from its unchanged
    /// percentage. Any other row: only that row's percentage is re-derived.
    /// Negative or non-finite weights are treated as 0.
    pub fn set_weight(&mut self, id: u64, weight: f64) -> bool {
        let weight = normalize_weight(weight);
        let Some(pos) = self.position(id) else {
            debug!(id, "ignoring weight change of unknown ingredient");
            return false;
        };

        let mut next = self.ingredients.clone();
        if pos == 0 {
            next[0].weight = weight;
            self.ingredients = weights_from_percentages(&next);
            info!(weight, "rescaled recipe to new flour weight");
        } else {
            let flour_weight = next[0].weight;
            next[pos] = next[pos]
                .with_weight(weight)
                .with_percentage(percentage_of(weight, flour_weight));
            self.ingredients = next;
            info!(id, weight, "updated ingredient weight");
        }
        true
    }

    /// Append an empty row and return its id.
    pub fn add_ingredient(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.ingredients
            .push(Ingredient::new(id, NEW_INGREDIENT_NAME, 0.0, 0.0));
        info!(id, "added ingredient");
        id
    }

    /// Remove a dependent row. Flour and unknown ids are left alone.
    ///
    /// Returns whether the list changed.
    pub fn remove_ingredient(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(0) => {
                debug!(id, "ignoring removal of flour");
                false
            }
            Some(pos) => {
                self.ingredients.remove(pos);
                info!(id, "removed ingredient");
                true
            }
            None => {
                debug!(id, "ignoring removal of unknown ingredient");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::is_consistent;

    #[test]
    fn test_default_has_only_flour() {
        let calc = RecipeCalculator::default();
        assert_eq!(calc.len(), 1);
        assert_eq!(calc.flour().name, "Flour");
        assert_eq!(calc.flour().weight, 100.0);
        assert_eq!(calc.flour().percentage, 100.0);
    }

    #[test]
    fn test_rename_flour_is_ignored() {
        let mut calc = RecipeCalculator::default();
        assert!(!calc.rename_ingredient(0, "Rye"));
        assert_eq!(calc.flour().name, "Flour");
    }

    #[test]
    fn test_rename_does_not_touch_numbers() {
        let mut calc = RecipeCalculator::new(&SeedConfig::with_examples());
        let before = calc.get(1).cloned().unwrap();

        assert!(calc.rename_ingredient(1, "Fresh yeast"));

        let after = calc.get(1).unwrap();
        assert_eq!(after.name, "Fresh yeast");
        assert_eq!(after.weight, before.weight);
        assert_eq!(after.percentage, before.percentage);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut calc = RecipeCalculator::new(&SeedConfig::with_examples());
        let snapshot = calc.ingredients().to_vec();

        assert!(!calc.rename_ingredient(42, "Ghost"));
        assert!(!calc.set_weight(42, 10.0));
        assert!(!calc.remove_ingredient(42));
        assert_eq!(calc.ingredients(), snapshot.as_slice());
    }

    #[test]
    fn test_dependent_edit_touches_only_that_row() {
        let mut calc = RecipeCalculator::new(&SeedConfig::with_examples());
        let water_before = calc.get(2).cloned().unwrap();

        calc.set_weight(1, 7.0);

        assert_float_absolute_eq!(calc.get(1).unwrap().percentage, 7.0, 1e-9);
        assert_eq!(calc.get(2).unwrap(), &water_before);
        assert!(is_consistent(calc.ingredients()));
    }

    #[test]
    fn test_negative_and_nan_weights_clamp_to_zero() {
        let mut calc = RecipeCalculator::new(&SeedConfig::with_examples());

        calc.set_weight(2, -10.0);
        assert_eq!(calc.get(2).unwrap().weight, 0.0);
        assert_eq!(calc.get(2).unwrap().percentage, 0.0);

        calc.set_weight(0, f64::NAN);
        assert_eq!(calc.flour().weight, 0.0);
        assert!(calc.ingredients().iter().all(|i| i.weight.is_finite()));
    }

    #[test]
    fn test_seed_flour_weight_rescales_examples() {
        let config = SeedConfig {
            flour_weight: 500.0,
            include_examples: true,
        };
        let calc = RecipeCalculator::new(&config);

        assert_eq!(calc.flour().weight, 500.0);
        assert_float_absolute_eq!(calc.get(1).unwrap().weight, 25.0, 1e-9);
        assert_float_absolute_eq!(calc.get(1).unwrap().percentage, 5.0, 1e-9);
    }

    #[test]
    fn test_totals() {
        let calc = RecipeCalculator::new(&SeedConfig::with_examples());
        assert_float_absolute_eq!(calc.total_weight(), 385.0, 1e-9);
        assert_float_absolute_eq!(calc.total_percentage(), 385.0, 1e-9);
    }
}
