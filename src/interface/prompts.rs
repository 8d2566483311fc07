use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};

use crate::calculator::{parse_weight, NEW_INGREDIENT_NAME};
use crate::error::Result;
use crate::interface::render::{display_recipe, menu_label};
use crate::state::{write_csv, RecipeCalculator};

/// Actions offered by the interactive editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetWeight,
    Rename,
    Add,
    Remove,
    Export,
    Quit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::SetWeight,
        Action::Rename,
        Action::Add,
        Action::Remove,
        Action::Export,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::SetWeight => "Set weight",
            Action::Rename => "Rename ingredient",
            Action::Add => "Add new ingredient",
            Action::Remove => "Remove ingredient",
            Action::Export => "Export to CSV",
            Action::Quit => "Quit",
        }
    }
}

/// Prompt for the next editor action.
pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Action::ALL[selection])
}

/// Let the user pick a row. With `include_flour` false the flour row is not
/// offered; returns `None` when nothing is selectable or the user backs out.
pub fn prompt_ingredient(
    calculator: &RecipeCalculator,
    prompt: &str,
    include_flour: bool,
) -> Result<Option<u64>> {
    let candidates: Vec<_> = calculator
        .ingredients()
        .iter()
        .filter(|i| include_flour || !calculator.is_flour(i.id))
        .collect();

    if candidates.is_empty() {
        println!("No ingredients to choose from.");
        return Ok(None);
    }

    let mut options: Vec<String> = candidates.iter().map(|i| menu_label(i)).collect();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).map(|i| i.id))
}

/// Prompt for a weight in grams. Unparseable input counts as 0.
pub fn prompt_weight(current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Weight in grams")
        .default(format!("{}", current))
        .interact_text()?;

    Ok(parse_weight(&input))
}

/// Prompt for a new ingredient name.
pub fn prompt_name(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Name")
        .default(current.to_string())
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for a CSV output path.
pub fn prompt_export_path() -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("Export to")
        .default("recipe.csv".to_string())
        .interact_text()?;

    Ok(PathBuf::from(input.trim()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Run the interactive editor until the user quits.
pub fn edit_recipe(calculator: &mut RecipeCalculator) -> Result<()> {
    loop {
        display_recipe(calculator);

        match prompt_action()? {
            Action::SetWeight => {
                let Some(id) = prompt_ingredient(calculator, "Which ingredient?", true)? else {
                    continue;
                };
                let current = calculator.get(id).map(|i| i.weight).unwrap_or(0.0);
                let weight = prompt_weight(current)?;
                calculator.set_weight(id, weight);
            }
            Action::Rename => {
                let Some(id) = prompt_ingredient(calculator, "Rename which?", false)? else {
                    continue;
                };
                let current = calculator
                    .get(id)
                    .map(|i| i.name.clone())
                    .unwrap_or_default();
                let name = prompt_name(&current)?;
                calculator.rename_ingredient(id, &name);
            }
            Action::Add => {
                let id = calculator.add_ingredient();
                let name = prompt_name(NEW_INGREDIENT_NAME)?;
                calculator.rename_ingredient(id, &name);
                let weight = prompt_weight(0.0)?;
                calculator.set_weight(id, weight);
            }
            Action::Remove => {
                let Some(id) = prompt_ingredient(calculator, "Remove which?", false)? else {
                    continue;
                };
                let name = calculator
                    .get(id)
                    .map(|i| i.name.clone())
                    .unwrap_or_default();
                if prompt_yes_no(&format!("Remove '{}'?", name), true)? {
                    calculator.remove_ingredient(id);
                    println!("Removed: {}", name);
                }
            }
            Action::Export => {
                let path = prompt_export_path()?;
                write_csv(calculator.ingredients(), &path)?;
                println!("Recipe written to {}", path.display());
            }
            Action::Quit => break,
        }
    }

    Ok(())
}
