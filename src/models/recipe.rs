use serde::{Deserialize, Serialize};

use crate::costing::constants::{CALORIES_HIGH_BELOW, CALORIES_LOW_BELOW, CALORIES_MODERATE_BELOW};
use crate::models::NutritionFacts;

/// One ingredient usage within a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    /// Catalog name, matched case-insensitively.
    pub ingredient: String,

    /// Quantity in the ingredient's catalog unit.
    pub quantity: f64,

    /// Supplied unit. `None` means "use the catalog unit".
    pub unit: Option<String>,
}

impl RecipeLine {
    pub fn new(ingredient: impl Into<String>, quantity: f64, unit: Option<&str>) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity,
            unit: unit.map(str::to_string),
        }
    }
}

/// Costed breakdown of a single recipe line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineCost {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: f64,
    pub cost: f64,
    /// Share of the recipe total, in percent.
    pub cost_share_pct: f64,
}

/// Comparison against the price currently on the menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuComparison {
    pub actual_menu_price: f64,
    pub actual_food_cost_pct: f64,
    pub target_gross_profit: f64,
    pub target_gross_profit_pct: f64,
    pub actual_gross_profit: f64,
    pub actual_gross_profit_pct: f64,
}

impl MenuComparison {
    /// Whether the actual food-cost percentage is above the target.
    pub fn exceeds_target(&self, target_food_cost_pct: f64) -> bool {
        self.actual_food_cost_pct > target_food_cost_pct
    }
}

/// Rough calorie band of one serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieClass {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl CalorieClass {
    /// Classify per-serving calories. `None` when there is nothing to classify.
    pub fn from_calories(calories_per_serving: f64) -> Option<Self> {
        if calories_per_serving <= 0.0 {
            None
        } else if calories_per_serving < CALORIES_LOW_BELOW {
            Some(CalorieClass::Low)
        } else if calories_per_serving < CALORIES_MODERATE_BELOW {
            Some(CalorieClass::Moderate)
        } else if calories_per_serving < CALORIES_HIGH_BELOW {
            Some(CalorieClass::High)
        } else {
            Some(CalorieClass::VeryHigh)
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalorieClass::Low => "low in calories",
            CalorieClass::Moderate => "moderate in calories",
            CalorieClass::High => "high in calories",
            CalorieClass::VeryHigh => "very high in calories",
        }
    }
}

/// Recipe nutrition totals and per-serving values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutritionSummary {
    pub total: NutritionFacts,
    pub per_serving: NutritionFacts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_class: Option<CalorieClass>,
}

impl NutritionSummary {
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }
}

/// Output of costing a full recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeResult {
    pub lines: Vec<LineCost>,
    pub total_cost: f64,
    pub servings: f64,
    pub cost_per_serving: f64,
    pub target_food_cost_pct: f64,
    pub target_menu_price: f64,

    #[serde(skip_serializing_if = "NutritionSummary::is_empty")]
    pub nutrition: NutritionSummary,

    /// Present only when an actual menu price was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<MenuComparison>,
}
