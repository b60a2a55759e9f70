use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::costing::constants::{
    DEFAULT_SERVINGS, DEFAULT_SUGGESTION_LIMIT, DEFAULT_TARGET_FOOD_COST_PCT,
};

/// MenuCosting — recipe costing, menu price targets, and profit what-ifs.
#[derive(Parser, Debug)]
#[command(name = "menu_costing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cost a recipe against an ingredient catalog.
    Recipe(RecipeArgs),

    /// Break down sales against food, labor and overhead costs.
    Profit(ProfitArgs),

    /// List catalog ingredients, or suggest names by prefix.
    Ingredients {
        /// Path to the ingredient catalog CSV.
        #[arg(short, long)]
        catalog: PathBuf,

        /// Only print names starting with this prefix.
        #[arg(long)]
        prefix: Option<String>,

        /// Maximum number of suggestions.
        #[arg(long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,

        /// Treat unparseable package quantities and prices as errors.
        #[arg(long)]
        strict_numbers: bool,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Register ingredients interactively into a catalog CSV.
    Register {
        /// Catalog CSV to extend (created when missing).
        #[arg(short, long)]
        catalog: PathBuf,
    },

    /// Show approximate calories and macros for common foods.
    Calories,

    /// Run the built-in calculation checks.
    Selftest,
}

#[derive(Args, Debug, Clone)]
pub struct RecipeArgs {
    /// Path to the ingredient catalog CSV.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Path to the recipe CSV (columns: ingredient, quantity, unit).
    #[arg(short, long)]
    pub recipe: Option<PathBuf>,

    /// Enter recipe lines as "ingredient,quantity,unit" on stdin.
    #[arg(short, long)]
    pub interactive: bool,

    /// Number of servings the recipe yields.
    #[arg(long, default_value_t = DEFAULT_SERVINGS)]
    pub servings: f64,

    /// Target food-cost percentage used to derive the menu price.
    #[arg(long, default_value_t = DEFAULT_TARGET_FOOD_COST_PCT, allow_negative_numbers = true)]
    pub target_food_cost_pct: f64,

    /// Current menu price, enables the profitability comparison.
    #[arg(long)]
    pub actual_menu_price: Option<f64>,

    /// Use the bundled sample catalog, recipe and parameters.
    #[arg(long)]
    pub demo: bool,

    /// Treat unparseable package quantities and prices as errors.
    #[arg(long)]
    pub strict_numbers: bool,

    /// Print JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ProfitArgs {
    /// Total sales for the period.
    #[arg(long, allow_negative_numbers = true)]
    pub sales: f64,

    /// Total food cost for the period.
    #[arg(long, allow_negative_numbers = true)]
    pub food_cost: f64,

    /// Total labor cost for the period.
    #[arg(long, allow_negative_numbers = true)]
    pub labor_cost: f64,

    /// Total overhead for the period.
    #[arg(long, allow_negative_numbers = true)]
    pub overhead: f64,

    /// What-if: change food cost by this percentage (e.g. -5).
    #[arg(long, allow_negative_numbers = true)]
    pub whatif_foodcost_delta_pct: Option<f64>,

    /// What-if: change sales by this percentage (e.g. 3).
    #[arg(long, allow_negative_numbers = true)]
    pub whatif_sales_delta_pct: Option<f64>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Usage examples printed with the help text.
pub const USAGE_EXAMPLES: &str = "\
Examples:
  menu_costing recipe --catalog ingredients.csv --recipe recipe.csv \\
      --servings 12 --target-food-cost-pct 30 --actual-menu-price 4.99
  menu_costing recipe --catalog ingredients.csv --interactive \\
      --servings 12 --target-food-cost-pct 30 --actual-menu-price 4.99
  menu_costing recipe --demo
  menu_costing profit --sales 100000 --food-cost 36000 --labor-cost 30000 --overhead 24000 \\
      --whatif-foodcost-delta-pct -5 --whatif-sales-delta-pct 3
  menu_costing ingredients --catalog ingredients.csv --prefix ba
  menu_costing register --catalog ingredients.csv
  menu_costing calories
  menu_costing selftest
";
