#[macro_use]
extern crate assert_float_eq;

use std::io::Write;

use tempfile::NamedTempFile;

use menu_costing_rs::costing::{compute_recipe, NumericPolicy};
use menu_costing_rs::io::{load_catalog, load_recipe, read_recipe_lines, save_catalog};
use menu_costing_rs::models::RecipeLine;
use menu_costing_rs::CostingError;

const CATALOG_CSV: &str = "\
Item Code,Product Name,Category,Stock Type,Brand,Supplier,Quantity per Package,Unit,Price in $
B01,Bacon,Meat,Dry,-,Main,10,pcs,10.00
E01,Eggs,Dairy,Dry,-,Main,12,pcs,6.00
F01,Flour,Bakery,Dry,-,Main,1000,G,2.50
X01,Mystery Spice,Spices,Dry,-,Main,n/a,g,4.00
";

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_breakfast_recipe_from_files() {
    let catalog_file = write_temp(CATALOG_CSV);
    let recipe_file = write_temp("ingredient,quantity,unit\nBacon,3,pcs\nEggs,2,pcs\n");

    let catalog = load_catalog(catalog_file.path(), NumericPolicy::Lenient).unwrap();
    let lines = load_recipe(recipe_file.path()).unwrap();
    let result = compute_recipe(&catalog, &lines, 12.0, 30.0, Some(4.99)).unwrap();

    assert_float_absolute_eq!(result.total_cost, 4.0, 1e-9);
    assert_float_absolute_eq!(result.cost_per_serving, 0.33, 1e-9);
    assert_float_absolute_eq!(result.target_menu_price, 1.11, 1e-9);
    let comparison = result.comparison.expect("menu price was supplied");
    assert_float_absolute_eq!(comparison.actual_food_cost_pct, 6.7, 1e-9);
}

#[test]
fn test_unit_price_property() {
    let catalog_file = write_temp(CATALOG_CSV);
    let catalog = load_catalog(catalog_file.path(), NumericPolicy::Lenient).unwrap();

    for record in catalog.sorted() {
        if record.package_quantity > 0.0 {
            assert_float_absolute_eq!(
                record.unit_price(),
                record.package_price / record.package_quantity,
                1e-12
            );
        } else {
            assert_eq!(record.unit_price(), 0.0);
        }
    }

    // "n/a" package quantity is coerced to zero in lenient mode.
    assert_eq!(catalog.lookup("mystery spice").unwrap().unit_price(), 0.0);
}

#[test]
fn test_strict_policy_rejects_catalog() {
    let catalog_file = write_temp(CATALOG_CSV);
    let err = load_catalog(catalog_file.path(), NumericPolicy::Strict).unwrap_err();
    assert!(matches!(err, CostingError::Parse(msg) if msg.contains("Mystery Spice")));
}

#[test]
fn test_cost_per_serving_and_target_properties() {
    let catalog_file = write_temp(CATALOG_CSV);
    let catalog = load_catalog(catalog_file.path(), NumericPolicy::Lenient).unwrap();
    let lines = vec![RecipeLine::new("Flour", 800.0, Some("g"))];

    for servings in [1.0, 4.0, 8.0] {
        let result = compute_recipe(&catalog, &lines, servings, 25.0, None).unwrap();
        assert_float_absolute_eq!(result.total_cost, 2.0, 1e-9);
        assert_float_absolute_eq!(result.cost_per_serving, 2.0 / servings, 0.005);
        assert_float_absolute_eq!(result.target_menu_price, 2.0 / servings / 0.25, 0.005);
    }
}

#[test]
fn test_kg_against_gram_catalog_is_mismatch() {
    let catalog_file = write_temp(CATALOG_CSV);
    let catalog = load_catalog(catalog_file.path(), NumericPolicy::Lenient).unwrap();
    let lines = vec![RecipeLine::new("flour", 0.5, Some("kg"))];

    let err = compute_recipe(&catalog, &lines, 1.0, 30.0, None).unwrap_err();
    assert!(matches!(
        err,
        CostingError::UnitMismatch { ref expected, ref supplied, .. }
            if expected == "g" && supplied == "kg"
    ));
}

#[test]
fn test_missing_catalog_columns() {
    let catalog_file = write_temp("Product Name,Unit,Price\nBacon,pcs,10\n");
    let err = load_catalog(catalog_file.path(), NumericPolicy::Lenient).unwrap_err();
    assert!(matches!(err, CostingError::Schema { .. }));
    assert!(err.to_string().contains("Quantity per Package"));
}

#[test]
fn test_interactive_then_compute() {
    let catalog_file = write_temp(CATALOG_CSV);
    let catalog = load_catalog(catalog_file.path(), NumericPolicy::Lenient).unwrap();

    let input = "Bacon,3,pcs\nEggs,two,pcs\nEggs,2,pcs\nfin\n";
    let mut transcript = Vec::new();
    let lines = read_recipe_lines(input.as_bytes(), &mut transcript, &catalog).unwrap();
    let result = compute_recipe(&catalog, &lines, 12.0, 30.0, None).unwrap();

    assert_eq!(lines.len(), 2);
    assert_float_absolute_eq!(result.total_cost, 4.0, 1e-9);
}

#[test]
fn test_saved_catalog_reloads() {
    let catalog_file = write_temp(CATALOG_CSV);
    let catalog = load_catalog(catalog_file.path(), NumericPolicy::Lenient).unwrap();

    let out = NamedTempFile::new().unwrap();
    save_catalog(out.path(), &catalog).unwrap();
    let reloaded = load_catalog(out.path(), NumericPolicy::Strict).unwrap();

    assert_eq!(reloaded.len(), catalog.len());
    assert_eq!(reloaded.lookup("flour").unwrap().unit, "g");
    assert_eq!(reloaded.suggest("", 10), catalog.suggest("", 10));
}
