use serde::{Deserialize, Serialize};

/// Aggregate figures for one reporting period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitInput {
    pub sales: f64,
    pub food_cost: f64,
    pub labor_cost: f64,
    pub overhead: f64,

    /// Hypothetical change to food cost, in percent (e.g. -5).
    pub whatif_foodcost_delta_pct: Option<f64>,

    /// Hypothetical change to sales, in percent (e.g. 3).
    pub whatif_sales_delta_pct: Option<f64>,
}

/// Cost structure of a period as amounts and percent of sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitAnalysis {
    pub sales: f64,
    pub food_cost: f64,
    pub food_cost_pct: f64,
    pub labor_cost: f64,
    pub labor_cost_pct: f64,
    pub prime_costs: f64,
    pub prime_costs_pct: f64,
    pub overhead: f64,
    pub overhead_pct: f64,
    pub total_costs: f64,
    pub total_costs_pct: f64,
    pub profit: f64,
    pub profit_pct: f64,

    /// Profit change if food cost moved by the requested percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatif_foodcost_profit_delta: Option<f64>,

    /// Profit change if sales moved by the requested percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatif_sales_profit_delta: Option<f64>,
}
