mod ingredient;
mod profit;
mod recipe;

pub use ingredient::{IngredientRecord, NutritionFacts};
pub(crate) use ingredient::normalize_key;
pub use profit::{ProfitAnalysis, ProfitInput};
pub use recipe::{CalorieClass, LineCost, MenuComparison, NutritionSummary, RecipeLine, RecipeResult};
