use crate::calculator::constants::{FLOUR_PERCENTAGE, PERCENTAGE_TOLERANCE};
use crate::models::Ingredient;

/// Overflowed results count as 0, like a zero flour weight does.
#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Percentage of `weight` relative to `flour_weight`.
///
/// Zero (or otherwise non-positive) flour, or a ratio too large for `f64`,
/// yields 0 instead of infinity/NaN.
#[inline]
pub fn percentage_of(weight: f64, flour_weight: f64) -> f64 {
    if flour_weight > 0.0 {
        finite_or_zero((weight / flour_weight) * 100.0)
    } else {
        0.0
    }
}

/// Weight implied by `percentage` of `flour_weight`. Never infinite or NaN.
#[inline]
pub fn weight_from_percentage(percentage: f64, flour_weight: f64) -> f64 {
    finite_or_zero((percentage / 100.0) * flour_weight)
}

/// Weight → percentage pass.
///
/// Row 0 is the flour reference and is pinned to 100%; every other row gets
/// its percentage re-derived from its own weight. Weights are untouched.
pub fn percentages_from_weights(ingredients: &[Ingredient]) -> Vec<Ingredient> {
    let Some(flour) = ingredients.first() else {
        return Vec::new();
    };
    let flour_weight = flour.weight;

    ingredients
        .iter()
        .enumerate()
        .map(|(i, ingredient)| {
            if i == 0 {
                ingredient.with_percentage(FLOUR_PERCENTAGE)
            } else {
                ingredient.with_percentage(percentage_of(ingredient.weight, flour_weight))
            }
        })
        .collect()
}

/// Percentage → weight pass.
///
/// Every dependent row gets its weight re-derived from its existing
/// percentage and the current flour weight. Percentages are untouched.
pub fn weights_from_percentages(ingredients: &[Ingredient]) -> Vec<Ingredient> {
    let Some(flour) = ingredients.first() else {
        return Vec::new();
    };
    let flour_weight = flour.weight;

    ingredients
        .iter()
        .enumerate()
        .map(|(i, ingredient)| {
            if i == 0 {
                ingredient.with_percentage(FLOUR_PERCENTAGE)
            } else {
                ingredient.with_weight(weight_from_percentage(ingredient.percentage, flour_weight))
            }
        })
        .collect()
}

/// Whether every row agrees with the flour weight.
///
/// With zero flour there is nothing to measure against, so only finiteness
/// is checked.
pub fn is_consistent(ingredients: &[Ingredient]) -> bool {
    let Some(flour) = ingredients.first() else {
        return false;
    };
    if (flour.percentage - FLOUR_PERCENTAGE).abs() > PERCENTAGE_TOLERANCE {
        return false;
    }

    ingredients.iter().skip(1).all(|ingredient| {
        if !ingredient.weight.is_finite() || !ingredient.percentage.is_finite() {
            return false;
        }
        if flour.weight <= 0.0 {
            return true;
        }
        let expected = percentage_of(ingredient.weight, flour.weight);
        (ingredient.percentage - expected).abs() <= PERCENTAGE_TOLERANCE * expected.max(1.0)
    })
}

/// Sum of all weights (total dough weight).
pub fn total_weight(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(|i| i.weight).sum()
}

/// Sum of all percentages, flour included.
pub fn total_percentage(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(|i| i.percentage).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dough() -> Vec<Ingredient> {
        vec![
            Ingredient::new(0, "Flour", 100.0, 100.0),
            Ingredient::new(1, "Yeast", 5.0, 0.0),
            Ingredient::new(2, "Water", 30.0, 0.0),
        ]
    }

    #[test]
    fn test_percentage_of() {
        assert_float_absolute_eq!(percentage_of(5.0, 100.0), 5.0, 1e-12);
        assert_float_absolute_eq!(percentage_of(400.0, 200.0), 200.0, 1e-12);
        assert_eq!(percentage_of(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_weight_from_percentage() {
        assert_float_absolute_eq!(weight_from_percentage(5.0, 200.0), 10.0, 1e-12);
        assert_eq!(weight_from_percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_overflow_is_zero() {
        assert_eq!(percentage_of(1e307, 1.0), 0.0);
        assert_eq!(percentage_of(1e300, 1e-300), 0.0);
        assert_eq!(weight_from_percentage(f64::MAX, 1e10), 0.0);
        assert_eq!(weight_from_percentage(f64::INFINITY, 0.0), 0.0);
    }

    #[test]
    fn test_percentages_from_weights_leaves_input_alone() {
        let before = dough();
        let after = percentages_from_weights(&before);

        assert_eq!(before[1].percentage, 0.0);
        assert_float_absolute_eq!(after[1].percentage, 5.0, 1e-12);
        assert_float_absolute_eq!(after[2].percentage, 30.0, 1e-12);
        assert_eq!(after[0].percentage, 100.0);
        assert!(is_consistent(&after));
        assert!(!is_consistent(&before));
    }

    #[test]
    fn test_weights_from_percentages_keeps_percentages() {
        let mut list = percentages_from_weights(&dough());
        list[0].weight = 200.0;
        let scaled = weights_from_percentages(&list);

        assert_float_absolute_eq!(scaled[1].weight, 10.0, 1e-12);
        assert_float_absolute_eq!(scaled[2].weight, 60.0, 1e-12);
        assert_eq!(scaled[1].percentage, list[1].percentage);
        assert!(is_consistent(&scaled));
    }

    #[test]
    fn test_zero_flour_never_produces_nan() {
        let mut list = dough();
        list[0].weight = 0.0;
        let pct = percentages_from_weights(&list);
        assert!(pct.iter().all(|i| i.percentage.is_finite()));
        assert_eq!(pct[1].percentage, 0.0);
    }

    #[test]
    fn test_empty_slice() {
        assert!(percentages_from_weights(&[]).is_empty());
        assert!(weights_from_percentages(&[]).is_empty());
        assert!(!is_consistent(&[]));
    }

    #[test]
    fn test_totals() {
        let list = percentages_from_weights(&dough());
        assert_float_absolute_eq!(total_weight(&list), 135.0, 1e-12);
        assert_float_absolute_eq!(total_percentage(&list), 135.0, 1e-12);
    }
}
