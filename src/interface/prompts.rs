use dialoguer::{Confirm, Input};

use crate::costing::Catalog;
use crate::error::Result;
use crate::models::{IngredientRecord, NutritionFacts};

/// Prompt for an optional text field; empty input yields `fallback`.
fn prompt_text(prompt: &str, fallback: Option<&str>) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        Ok(fallback.map(str::to_string))
    } else {
        Ok(Some(input.to_string()))
    }
}

/// Prompt for a number, re-asking until it parses.
fn prompt_number(prompt: &str, default: Option<f64>) -> Result<f64> {
    let mut input = Input::<f64>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}

/// Prompt for one new ingredient.
///
/// Returns `None` when the name is left empty. Names already in `catalog`
/// or `pending` are rejected and re-asked.
pub fn prompt_ingredient(
    catalog: &Catalog,
    pending: &[IngredientRecord],
) -> Result<Option<IngredientRecord>> {
    let name = loop {
        let Some(name) = prompt_text("Ingredient name (Enter to finish)", None)? else {
            return Ok(None);
        };

        let taken = catalog.contains(&name)
            || pending.iter().any(|r| r.key() == name.to_lowercase());
        if taken {
            println!("'{}' is already registered.", name);
            continue;
        }
        break name;
    };

    let auto_code = format!("AUTO-{:03}", catalog.len() + pending.len() + 1);
    let item_code = prompt_text("Item code (optional)", Some(&auto_code))?;
    let category = prompt_text("Category (e.g. Meat, Produce, Dairy)", Some("General"))?;
    let stock_type = prompt_text("Stock type (optional)", None)?;
    let brand = prompt_text("Brand (optional)", None)?;
    let supplier = prompt_text("Supplier (optional)", None)?;

    let package_quantity = prompt_number("Quantity per package", None)?;
    let unit = loop {
        if let Some(unit) = prompt_text("Unit (e.g. kg, g, l, pcs)", None)? {
            break unit.to_lowercase();
        }
        println!("A unit is required.");
    };
    let package_price = prompt_number("Package price ($)", None)?;

    println!("Nutrition per {} (optional, Enter keeps 0)", unit);
    let nutrition = NutritionFacts {
        calories: prompt_number(&format!("Calories per {}", unit), Some(0.0))?,
        protein: prompt_number(&format!("Protein (g) per {}", unit), Some(0.0))?,
        carbs: prompt_number(&format!("Carbs (g) per {}", unit), Some(0.0))?,
        fat: prompt_number(&format!("Fat (g) per {}", unit), Some(0.0))?,
    };

    let record = IngredientRecord {
        item_code,
        name,
        category,
        stock_type,
        brand,
        supplier,
        package_quantity,
        unit,
        package_price,
        nutrition,
    };

    println!(
        "Registered '{}': ${:.2} per {}",
        record.name,
        record.unit_price(),
        record.unit
    );

    Ok(Some(record))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
