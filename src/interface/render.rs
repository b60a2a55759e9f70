use std::fmt;

use crate::costing::constants::{
    CALORIE_REFERENCE, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use crate::models::{IngredientRecord, NutritionFacts, ProfitAnalysis, RecipeResult};

struct RecipeReport<'a>(&'a RecipeResult);

impl fmt::Display for RecipeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        // Find max ingredient name length for alignment
        let name_width = result
            .lines
            .iter()
            .map(|l| l.ingredient.len())
            .max()
            .unwrap_or(10)
            .max("Ingredient".len());

        writeln!(f)?;
        writeln!(f, "=== Ingredients ===")?;
        writeln!(
            f,
            "{:<width$} | {:>10} | {:<6} | {:>10} | {:>10} | {:>7}",
            "Ingredient",
            "Quantity",
            "Unit",
            "$/Unit",
            "Cost",
            "%",
            width = name_width
        )?;
        for line in &result.lines {
            writeln!(
                f,
                "{:<width$} | {:>10} | {:<6} | {:>10} | {:>10} | {:>6.2}%",
                line.ingredient,
                line.quantity,
                line.unit,
                format!("${:.2}", line.unit_price),
                format!("${:.2}", line.cost),
                line.cost_share_pct,
                width = name_width
            )?;
        }

        writeln!(f)?;
        writeln!(f, "--- Totals ---")?;
        writeln!(f, "Recipe cost: ${:.2}", result.total_cost)?;
        writeln!(f, "Servings: {}", result.servings)?;
        writeln!(f, "Cost per serving: ${:.2}", result.cost_per_serving)?;
        writeln!(f, "Target food cost: {:.1}%", result.target_food_cost_pct)?;
        writeln!(f, "Target menu price: ${:.2}", result.target_menu_price)?;

        if !result.nutrition.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Nutrition ---")?;
            writeln!(f, "Whole recipe: {}", NutritionLine(&result.nutrition.total))?;
            writeln!(f, "Per serving:  {}", NutritionLine(&result.nutrition.per_serving))?;
            if let Some(class) = result.nutrition.calorie_class {
                writeln!(f, "Classification: {}", class.label())?;
            }
        }

        let Some(comparison) = &result.comparison else {
            return Ok(());
        };

        writeln!(f)?;
        writeln!(f, "--- Current Menu ---")?;
        writeln!(f, "Actual menu price: ${:.2}", comparison.actual_menu_price)?;
        writeln!(f, "Actual food cost: {:.1}%", comparison.actual_food_cost_pct)?;
        writeln!(
            f,
            "Target gross profit: ${:.2} ({:.1}%)",
            comparison.target_gross_profit, comparison.target_gross_profit_pct
        )?;
        writeln!(
            f,
            "Actual gross profit: ${:.2} ({:.1}%)",
            comparison.actual_gross_profit, comparison.actual_gross_profit_pct
        )?;

        writeln!(f)?;
        if comparison.exceeds_target(result.target_food_cost_pct) {
            writeln!(
                f,
                "Recommendation: food cost ({:.1}%) is above the target ({:.1}%). Consider raising the price to ${:.2}.",
                comparison.actual_food_cost_pct,
                result.target_food_cost_pct,
                result.target_menu_price
            )
        } else {
            writeln!(f, "Food cost is under control.")
        }
    }
}

/// Format a costed recipe as an aligned table plus totals.
pub fn format_recipe_result(result: &RecipeResult) -> String {
    RecipeReport(result).to_string()
}

struct NutritionLine<'a>(&'a NutritionFacts);

impl fmt::Display for NutritionLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let facts = self.0;
        write!(
            f,
            "{:.1} kcal, P:{:.1}g C:{:.1}g F:{:.1}g",
            facts.calories, facts.protein, facts.carbs, facts.fat
        )
    }
}

struct ProfitReport<'a>(&'a ProfitAnalysis);

impl fmt::Display for ProfitReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let rows = [
            ("Sales", analysis.sales, 100.0),
            ("Food Costs", analysis.food_cost, analysis.food_cost_pct),
            ("Labor Costs", analysis.labor_cost, analysis.labor_cost_pct),
            ("Prime Costs", analysis.prime_costs, analysis.prime_costs_pct),
            ("Overhead", analysis.overhead, analysis.overhead_pct),
            ("Total Costs", analysis.total_costs, analysis.total_costs_pct),
            ("Profit", analysis.profit, analysis.profit_pct),
        ];

        writeln!(f, "{:<12} | {:>14} | {:>10}", "Item", "Amount", "% of Sales")?;
        for (label, amount, pct) in rows {
            writeln!(f, "{:<12} | {:>14.2} | {:>9.1}%", label, amount, pct)?;
        }

        if analysis.whatif_foodcost_profit_delta.is_some()
            || analysis.whatif_sales_profit_delta.is_some()
        {
            writeln!(f)?;
        }
        if let Some(delta) = analysis.whatif_foodcost_profit_delta {
            writeln!(f, "Food cost scenario => {} profit", signed_money(delta))?;
        }
        if let Some(delta) = analysis.whatif_sales_profit_delta {
            writeln!(f, "Sales scenario => {} profit", signed_money(delta))?;
        }

        Ok(())
    }
}

/// Format a profit analysis as an "amount / % of sales" table.
pub fn format_profit_analysis(analysis: &ProfitAnalysis) -> String {
    ProfitReport(analysis).to_string()
}

fn signed_money(amount: f64) -> String {
    let sign = if amount >= 0.0 { "+" } else { "-" };
    format!("{}${:.2}", sign, amount.abs())
}

struct CalorieReference;

impl fmt::Display for CalorieReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Calorie Reference ===")?;
        writeln!(f, "Approximate values per 100 g or the stated portion")?;

        for (category, foods) in CALORIE_REFERENCE {
            writeln!(f)?;
            writeln!(f, "--- {} ---", category)?;
            for (name, calories, protein, carbs, fat) in foods {
                writeln!(
                    f,
                    "  {:<28} {:>5.0} kcal  P:{:>5.1}g C:{:>5.1}g F:{:>5.1}g",
                    name, calories, protein, carbs, fat
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Tips:")?;
        writeln!(f, "  Values vary by brand; check the nutrition label when you can.")?;
        writeln!(f, "  1 g of carbohydrate = {} kcal", KCAL_PER_GRAM_CARBS)?;
        writeln!(f, "  1 g of protein = {} kcal", KCAL_PER_GRAM_PROTEIN)?;
        writeln!(f, "  1 g of fat = {} kcal", KCAL_PER_GRAM_FAT)
    }
}

/// Format the calorie and macro reference table for common foods.
pub fn format_calorie_reference() -> String {
    CalorieReference.to_string()
}

/// Display a costed recipe.
pub fn display_recipe_result(result: &RecipeResult) {
    print!("{}", format_recipe_result(result));
}

/// Display a profit analysis.
pub fn display_profit_analysis(analysis: &ProfitAnalysis) {
    print!("{}", format_profit_analysis(analysis));
}

/// Display the calorie reference table.
pub fn display_calorie_reference() {
    print!("{}", format_calorie_reference());
}

/// Display catalog ingredients with package and unit prices.
pub fn display_catalog(records: &[&IngredientRecord]) {
    if records.is_empty() {
        println!("No ingredients in the catalog.");
        return;
    }

    println!();
    println!("=== Ingredients ({} items) ===", records.len());
    println!();

    for record in records {
        println!(
            "- {} ({})",
            record.name,
            record.category.as_deref().unwrap_or("General")
        );
        println!(
            "  Price: ${:.2} per {} {}",
            record.package_price, record.package_quantity, record.unit
        );
        println!("  Unit price: ${:.2} per {}", record.unit_price(), record.unit);
        if !record.nutrition.is_empty() {
            println!(
                "  Per {}: {}",
                record.unit,
                NutritionLine(&record.nutrition)
            );
        }
    }

    println!();
}

/// Display prefix suggestions, one per line.
pub fn display_suggestions(prefix: &str, names: &[&str]) {
    if names.is_empty() {
        println!("No ingredients start with '{}'.", prefix);
        return;
    }
    for name in names {
        println!("{}", name);
    }
}
