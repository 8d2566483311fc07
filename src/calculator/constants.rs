/// Reserved label of the reference row. Never user-editable.
pub const FLOUR_NAME: &str = "Flour";

/// Id of the flour row in a freshly seeded recipe.
pub const FLOUR_ID: u64 = 0;

/// Flour weight (grams) a recipe starts with.
pub const DEFAULT_FLOUR_WEIGHT: f64 = 100.0;

/// Flour is the 100% baseline every other row is measured against.
pub const FLOUR_PERCENTAGE: f64 = 100.0;

/// Label given to rows created by `add_ingredient`.
pub const NEW_INGREDIENT_NAME: &str = "New ingredient";

/// Absolute tolerance (percentage points) used when checking consistency.
pub const PERCENTAGE_TOLERANCE: f64 = 1e-9;

/// Example dough rows seeded after flour: (name, grams at 100 g flour).
pub const EXAMPLE_INGREDIENTS: [(&str, f64); 3] =
    [("Yeast", 5.0), ("Water", 30.0), ("Sugar", 250.0)];
