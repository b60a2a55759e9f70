use tracing::{debug, info};

use crate::costing::catalog::Catalog;
use crate::costing::rounding::{round_money, round_nutrition, round_pct};
use crate::error::{CostingError, Result};
use crate::models::{
    CalorieClass, IngredientRecord, LineCost, MenuComparison, NutritionFacts, NutritionSummary,
    RecipeLine, RecipeResult,
};

/// `numerator / denominator`, or zero when the denominator is zero.
#[inline]
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Menu price at which a serving hits the target food-cost percentage.
///
/// Zero when the target percentage is not positive.
pub fn target_menu_price(cost_per_serving: f64, target_food_cost_pct: f64) -> f64 {
    if target_food_cost_pct > 0.0 {
        cost_per_serving / (target_food_cost_pct / 100.0)
    } else {
        0.0
    }
}

/// Resolve a line against the catalog and check its unit.
///
/// Returns the record and the effective (lowercase) unit. No conversion is
/// ever attempted: a different unit is a [`CostingError::UnitMismatch`].
pub fn resolve_line<'c>(
    catalog: &'c Catalog,
    line: &RecipeLine,
) -> Result<(&'c IngredientRecord, String)> {
    let ingredient = catalog.lookup(&line.ingredient)?;
    let expected = ingredient.unit.to_lowercase();

    let supplied = line
        .unit
        .as_deref()
        .map(|u| u.trim().to_lowercase())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| expected.clone());

    if supplied != expected {
        return Err(CostingError::UnitMismatch {
            ingredient: line.ingredient.trim().to_string(),
            expected,
            supplied,
        });
    }

    Ok((ingredient, supplied))
}

/// Cost a recipe against the catalog.
///
/// Any unresolved ingredient or unit mismatch aborts the whole computation.
/// The menu comparison is only produced when `actual_menu_price` is given.
pub fn compute_recipe(
    catalog: &Catalog,
    lines: &[RecipeLine],
    servings: f64,
    target_food_cost_pct: f64,
    actual_menu_price: Option<f64>,
) -> Result<RecipeResult> {
    let mut costed = Vec::with_capacity(lines.len());
    let mut total_cost = 0.0;
    let mut nutrition_total = NutritionFacts::default();

    for line in lines {
        let (ingredient, unit) = resolve_line(catalog, line)?;
        let unit_price = ingredient.unit_price();
        let cost = unit_price * line.quantity;

        debug!(
            ingredient = %ingredient.name,
            quantity = line.quantity,
            unit = %unit,
            cost,
            "costed recipe line"
        );

        total_cost += cost;
        nutrition_total += ingredient.nutrition.scaled(line.quantity);
        costed.push((line, unit, unit_price, cost));
    }

    let line_costs: Vec<LineCost> = costed
        .into_iter()
        .map(|(line, unit, unit_price, cost)| {
            // Share of the rounded line cost over the unrounded total.
            let cost = round_money(cost);
            LineCost {
                ingredient: line.ingredient.trim().to_string(),
                quantity: line.quantity,
                unit,
                unit_price: round_money(unit_price),
                cost,
                cost_share_pct: round_money(ratio(cost, total_cost) * 100.0),
            }
        })
        .collect();

    let cost_per_serving = ratio(total_cost, servings);
    let target_price = target_menu_price(cost_per_serving, target_food_cost_pct);

    let comparison = actual_menu_price
        .map(|price| compare_menu_price(cost_per_serving, target_price, price));

    let result = RecipeResult {
        lines: line_costs,
        total_cost: round_money(total_cost),
        servings,
        cost_per_serving: round_money(cost_per_serving),
        target_food_cost_pct: round_money(target_food_cost_pct),
        target_menu_price: round_money(target_price),
        nutrition: summarize_nutrition(&nutrition_total, servings),
        comparison,
    };

    info!(
        lines = result.lines.len(),
        total_cost = result.total_cost,
        cost_per_serving = result.cost_per_serving,
        target_menu_price = result.target_menu_price,
        "recipe computed"
    );

    Ok(result)
}

fn compare_menu_price(cost_per_serving: f64, target_price: f64, actual_price: f64) -> MenuComparison {
    let target_gross_profit = target_price - cost_per_serving;
    let actual_gross_profit = actual_price - cost_per_serving;

    MenuComparison {
        actual_menu_price: round_money(actual_price),
        actual_food_cost_pct: round_pct(ratio(cost_per_serving, actual_price) * 100.0),
        target_gross_profit: round_money(target_gross_profit),
        target_gross_profit_pct: round_pct(ratio(target_gross_profit, target_price) * 100.0),
        actual_gross_profit: round_money(actual_gross_profit),
        actual_gross_profit_pct: round_pct(ratio(actual_gross_profit, actual_price) * 100.0),
    }
}

fn summarize_nutrition(total: &NutritionFacts, servings: f64) -> NutritionSummary {
    let round = |facts: NutritionFacts| NutritionFacts {
        calories: round_nutrition(facts.calories),
        protein: round_nutrition(facts.protein),
        carbs: round_nutrition(facts.carbs),
        fat: round_nutrition(facts.fat),
    };

    let per_serving = round(total.scaled(ratio(1.0, servings)));

    // Classified on the rounded per-serving value.
    NutritionSummary {
        total: round(*total),
        calorie_class: CalorieClass::from_calories(per_serving.calories),
        per_serving,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, quantity: f64, unit: &str, price: f64, calories: f64) -> IngredientRecord {
        IngredientRecord {
            item_code: None,
            name: name.to_string(),
            category: None,
            stock_type: None,
            brand: None,
            supplier: None,
            package_quantity: quantity,
            unit: unit.to_string(),
            package_price: price,
            nutrition: NutritionFacts {
                calories,
                ..Default::default()
            },
        }
    }

    fn breakfast_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("Bacon", 10.0, "pcs", 10.0, 0.0),
            record("Eggs", 12.0, "pcs", 6.0, 70.0),
            record("Flour", 1000.0, "g", 2.5, 3.64),
        ])
    }

    #[test]
    fn test_breakfast_scenario() {
        let catalog = breakfast_catalog();
        let lines = vec![
            RecipeLine::new("Bacon", 3.0, Some("pcs")),
            RecipeLine::new("Eggs", 2.0, Some("pcs")),
        ];

        let result = compute_recipe(&catalog, &lines, 12.0, 30.0, Some(4.99)).unwrap();

        assert_eq!(result.total_cost, 4.0);
        assert_eq!(result.cost_per_serving, 0.33);
        assert_eq!(result.target_menu_price, 1.11);
        assert_eq!(result.lines[0].cost, 3.0);
        assert_eq!(result.lines[1].cost, 1.0);
        assert_eq!(result.lines[0].cost_share_pct, 75.0);
        assert_eq!(result.lines[1].unit_price, 0.5);

        let comparison = result.comparison.unwrap();
        assert_eq!(comparison.actual_food_cost_pct, 6.7);
        assert_eq!(comparison.actual_gross_profit, 4.66);
        assert_eq!(comparison.actual_gross_profit_pct, 93.3);
        assert_eq!(comparison.target_gross_profit, 0.78);
        assert_eq!(comparison.target_gross_profit_pct, 70.0);
    }

    #[test]
    fn test_comparison_omitted_without_menu_price() {
        let catalog = breakfast_catalog();
        let lines = vec![RecipeLine::new("Bacon", 1.0, None)];
        let result = compute_recipe(&catalog, &lines, 1.0, 30.0, None).unwrap();
        assert!(result.comparison.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("comparison").is_none());
    }

    #[test]
    fn test_unit_defaults_to_catalog_unit() {
        let catalog = breakfast_catalog();
        let lines = vec![RecipeLine::new("flour", 500.0, None)];
        let result = compute_recipe(&catalog, &lines, 1.0, 30.0, None).unwrap();
        assert_eq!(result.lines[0].unit, "g");
        assert_eq!(result.total_cost, 1.25);
    }

    #[test]
    fn test_unit_match_is_case_insensitive() {
        let catalog = breakfast_catalog();
        let lines = vec![RecipeLine::new("Eggs", 1.0, Some(" PCS "))];
        assert!(compute_recipe(&catalog, &lines, 1.0, 30.0, None).is_ok());
    }

    #[test]
    fn test_unit_mismatch_never_converts() {
        let catalog = breakfast_catalog();
        let lines = vec![
            RecipeLine::new("Bacon", 1.0, Some("pcs")),
            RecipeLine::new("Flour", 0.5, Some("kg")),
        ];
        let err = compute_recipe(&catalog, &lines, 1.0, 30.0, None).unwrap_err();
        match err {
            CostingError::UnitMismatch {
                ingredient,
                expected,
                supplied,
            } => {
                assert_eq!(ingredient, "Flour");
                assert_eq!(expected, "g");
                assert_eq!(supplied, "kg");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_ingredient_aborts() {
        let catalog = breakfast_catalog();
        let lines = vec![
            RecipeLine::new("Bacon", 1.0, None),
            RecipeLine::new("Truffle", 1.0, None),
        ];
        let err = compute_recipe(&catalog, &lines, 1.0, 30.0, None).unwrap_err();
        assert!(matches!(err, CostingError::NotFound(name) if name == "Truffle"));
    }

    #[test]
    fn test_degenerate_zero_cases() {
        let catalog = breakfast_catalog();
        let lines = vec![RecipeLine::new("Bacon", 2.0, None)];

        let zero_servings = compute_recipe(&catalog, &lines, 0.0, 30.0, Some(0.0)).unwrap();
        assert_eq!(zero_servings.cost_per_serving, 0.0);
        assert_eq!(zero_servings.target_menu_price, 0.0);
        let comparison = zero_servings.comparison.unwrap();
        assert_eq!(comparison.actual_food_cost_pct, 0.0);
        assert_eq!(comparison.actual_gross_profit_pct, 0.0);

        let zero_target = compute_recipe(&catalog, &lines, 1.0, 0.0, None).unwrap();
        assert_eq!(zero_target.target_menu_price, 0.0);

        let negative_target = compute_recipe(&catalog, &lines, 1.0, -10.0, None).unwrap();
        assert_eq!(negative_target.target_menu_price, 0.0);
    }

    #[test]
    fn test_zero_total_cost_shares() {
        let catalog = Catalog::from_records(vec![record("Water", 0.0, "l", 5.0, 0.0)]);
        let lines = vec![RecipeLine::new("Water", 3.0, None)];
        let result = compute_recipe(&catalog, &lines, 1.0, 30.0, None).unwrap();
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.lines[0].cost_share_pct, 0.0);
    }

    #[test]
    fn test_nutrition_summary() {
        let catalog = breakfast_catalog();
        let lines = vec![RecipeLine::new("Eggs", 6.0, None)];
        let result = compute_recipe(&catalog, &lines, 2.0, 30.0, None).unwrap();
        assert_eq!(result.nutrition.total.calories, 420.0);
        assert_eq!(result.nutrition.per_serving.calories, 210.0);
        assert_eq!(result.nutrition.calorie_class, Some(CalorieClass::Moderate));
    }

    #[test]
    fn test_cost_share_uses_rounded_line_cost() {
        let catalog = Catalog::from_records(vec![
            record("Salt", 1000.0, "pcs", 6.0, 0.0),
            record("Saffron", 1.0, "pcs", 9.994, 0.0),
        ]);
        let lines = vec![
            RecipeLine::new("Salt", 1.0, None),
            RecipeLine::new("Saffron", 1.0, None),
        ];
        let result = compute_recipe(&catalog, &lines, 1.0, 30.0, None).unwrap();

        assert_eq!(result.total_cost, 10.0);
        assert_eq!(result.lines[0].cost, 0.01);
        assert_eq!(result.lines[0].cost_share_pct, 0.1);
        assert_eq!(result.lines[1].cost, 9.99);
        assert_eq!(result.lines[1].cost_share_pct, 99.9);
    }

    #[test]
    fn test_calorie_class_uses_displayed_value() {
        let catalog = Catalog::from_records(vec![record("Granola", 1.0, "pcs", 1.0, 199.96)]);
        let lines = vec![RecipeLine::new("Granola", 1.0, None)];
        let result = compute_recipe(&catalog, &lines, 1.0, 30.0, None).unwrap();

        assert_eq!(result.nutrition.per_serving.calories, 200.0);
        assert_eq!(result.nutrition.calorie_class, Some(CalorieClass::Moderate));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let catalog = breakfast_catalog();
        let lines = vec![
            RecipeLine::new("Bacon", 3.0, Some("pcs")),
            RecipeLine::new("Eggs", 2.0, Some("pcs")),
        ];
        let first = compute_recipe(&catalog, &lines, 12.0, 30.0, Some(4.99)).unwrap();
        let second = compute_recipe(&catalog, &lines, 12.0, 30.0, Some(4.99)).unwrap();
        assert_eq!(first, second);
    }
}
