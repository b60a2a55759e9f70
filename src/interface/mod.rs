pub mod prompts;
pub mod render;

pub use prompts::{prompt_ingredient, prompt_yes_no};
pub use render::{
    display_calorie_reference, display_catalog, display_profit_analysis, display_recipe_result,
    display_suggestions, format_calorie_reference, format_profit_analysis, format_recipe_result,
};
