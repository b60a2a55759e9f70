use tracing::info;

use crate::costing::rounding::{round_money, round_pct};
use crate::models::{ProfitInput, ProfitAnalysis};

/// Break a period's sales down into cost structure and profit.
///
/// Formula: prime = food + labor; total = prime + overhead; profit = sales - total.
/// Every "% of sales" figure is 0 when sales is exactly 0.
pub fn analyze_profit(input: &ProfitInput) -> ProfitAnalysis {
    let prime_costs = input.food_cost + input.labor_cost;
    let total_costs = prime_costs + input.overhead;
    let profit = input.sales - total_costs;

    let pct = |amount: f64| {
        if input.sales != 0.0 {
            round_pct(amount / input.sales * 100.0)
        } else {
            0.0
        }
    };

    // Cutting a cost raises profit by the same amount.
    let whatif_foodcost_profit_delta = input
        .whatif_foodcost_delta_pct
        .map(|delta_pct| round_money(-(input.food_cost * delta_pct / 100.0)));
    let whatif_sales_profit_delta = input
        .whatif_sales_delta_pct
        .map(|delta_pct| round_money(input.sales * delta_pct / 100.0));

    let analysis = ProfitAnalysis {
        sales: round_money(input.sales),
        food_cost: round_money(input.food_cost),
        food_cost_pct: pct(input.food_cost),
        labor_cost: round_money(input.labor_cost),
        labor_cost_pct: pct(input.labor_cost),
        prime_costs: round_money(prime_costs),
        prime_costs_pct: pct(prime_costs),
        overhead: round_money(input.overhead),
        overhead_pct: pct(input.overhead),
        total_costs: round_money(total_costs),
        total_costs_pct: pct(total_costs),
        profit: round_money(profit),
        profit_pct: pct(profit),
        whatif_foodcost_profit_delta,
        whatif_sales_profit_delta,
    };

    info!(
        sales = analysis.sales,
        profit = analysis.profit,
        profit_pct = analysis.profit_pct,
        "profit analyzed"
    );

    analysis
}
