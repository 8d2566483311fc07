use serde::{Deserialize, Serialize};

/// A single row of a recipe.
///
/// For the flour row (position 0) `weight` is the source of truth; for every
/// other row `percentage` is, and `weight` is derived from it whenever the
/// flour weight changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u64,
    pub name: String,
    /// Grams.
    pub weight: f64,
    /// Weight relative to flour weight, times 100. May exceed 100.
    pub percentage: f64,
}

impl Ingredient {
    pub fn new(id: u64, name: impl Into<String>, weight: f64, percentage: f64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            percentage,
        }
    }

    /// Percentage as shown to the user: whole numbers without decimals,
    /// everything else with one decimal, always followed by `%`.
    pub fn display_percentage(&self) -> String {
        if self.percentage.fract() == 0.0 {
            format!("{:.0}%", self.percentage)
        } else {
            format!("{:.1}%", self.percentage)
        }
    }

    /// Copy of this ingredient with a different weight.
    pub fn with_weight(&self, weight: f64) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }

    /// Copy of this ingredient with a different percentage.
    pub fn with_percentage(&self, percentage: f64) -> Self {
        Self {
            percentage,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_percentage_whole_number() {
        let yeast = Ingredient::new(1, "Yeast", 5.0, 5.0);
        assert_eq!(yeast.display_percentage(), "5%");

        let sugar = Ingredient::new(3, "Sugar", 250.0, 250.0);
        assert_eq!(sugar.display_percentage(), "250%");

        let empty = Ingredient::new(4, "New ingredient", 0.0, 0.0);
        assert_eq!(empty.display_percentage(), "0%");
    }

    #[test]
    fn test_display_percentage_fraction() {
        let salt = Ingredient::new(2, "Salt", 1.0, 100.0 / 3.0);
        assert_eq!(salt.display_percentage(), "33.3%");

        let oil = Ingredient::new(5, "Oil", 2.5, 2.5);
        assert_eq!(oil.display_percentage(), "2.5%");
    }

    #[test]
    fn test_with_weight_keeps_identity() {
        let water = Ingredient::new(2, "Water", 30.0, 30.0);
        let heavier = water.with_weight(60.0);
        assert_eq!(heavier.id, 2);
        assert_eq!(heavier.name, "Water");
        assert_eq!(heavier.percentage, 30.0);
        assert_eq!(heavier.weight, 60.0);
    }
}
