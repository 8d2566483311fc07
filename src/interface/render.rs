use crate::models::Ingredient;
use crate::state::RecipeCalculator;

/// Print the recipe as an aligned table with a summary line.
pub fn display_recipe(calculator: &RecipeCalculator) {
    let rows = calculator.ingredients();

    println!();
    println!("=== Baker's Percentage ===");
    println!();

    let name_width = rows.iter().map(|i| i.name.chars().count()).max().unwrap_or(10);

    for (i, ingredient) in rows.iter().enumerate() {
        println!("{}", format_row(ingredient, i == 0, name_width));
    }

    println!();
    println!("--- Summary ---");
    println!("Ingredients: {}", rows.len());
    println!("Total weight: {:.1} g", calculator.total_weight());
    println!("Total percentage: {:.1}%", calculator.total_percentage());
    println!();
}

/// One table line: id, name, weight and percentage. Flour is marked locked.
pub fn format_row(ingredient: &Ingredient, locked: bool, name_width: usize) -> String {
    let lock = if locked { " [locked]" } else { "" };
    format!(
        "{:>3}. {:<width$} {:>9.1} g {:>8}{}",
        ingredient.id,
        ingredient.name,
        ingredient.weight,
        ingredient.display_percentage(),
        lock,
        width = name_width
    )
}

/// Short label used in selection menus.
pub fn menu_label(ingredient: &Ingredient) -> String {
    format!(
        "{} ({:.1} g, {})",
        ingredient.name,
        ingredient.weight,
        ingredient.display_percentage()
    )
}
