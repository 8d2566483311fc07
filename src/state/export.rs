use std::path::Path;

use crate::error::Result;
use crate::models::Ingredient;

/// Write the recipe to a CSV file.
///
/// Weights are rounded to two decimals; percentages use the display form.
pub fn write_csv<P: AsRef<Path>>(ingredients: &[Ingredient], path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "name", "weight", "percentage"])?;

    for ingredient in ingredients {
        wtr.write_record([
            ingredient.id.to_string(),
            ingredient.name.clone(),
            format!("{:.2}", ingredient.weight),
            ingredient.display_percentage(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Pretty JSON array of the recipe rows.
pub fn to_json(ingredients: &[Ingredient]) -> Result<String> {
    Ok(serde_json::to_string_pretty(ingredients)?)
}
