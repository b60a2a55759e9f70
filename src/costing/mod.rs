pub mod catalog;
pub mod constants;
pub mod profit;
pub mod recipe;
pub mod rounding;

pub use catalog::{Catalog, NumericPolicy};
pub use constants::*;
pub use profit::analyze_profit;
pub use recipe::{compute_recipe, resolve_line, target_menu_price};
pub use rounding::{round_money, round_nutrition, round_pct, round_to};
