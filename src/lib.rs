pub mod cli;
pub mod costing;
pub mod error;
pub mod interface;
pub mod io;
pub mod logging;
pub mod models;

pub use costing::{Catalog, NumericPolicy, analyze_profit, compute_recipe};
pub use error::{CostingError, Result};
pub use models::{IngredientRecord, ProfitAnalysis, ProfitInput, RecipeLine, RecipeResult};
