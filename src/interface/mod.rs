pub mod prompts;
pub mod render;

pub use prompts::{
    edit_recipe, prompt_action, prompt_export_path, prompt_ingredient, prompt_name,
    prompt_weight, prompt_yes_no, Action,
};
pub use render::{display_recipe, format_row, menu_label};
