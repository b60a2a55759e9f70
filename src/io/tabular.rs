use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::costing::constants::*;
use crate::costing::{Catalog, NumericPolicy};
use crate::error::{CostingError, Result};
use crate::models::RecipeLine;

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

/// Read a header row and all data rows as owned strings.
fn read_table<R: Read>(reader: R) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut rdr = csv_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok((headers, rows))
}

/// Load an ingredient catalog from CSV data.
pub fn load_catalog_from_reader<R: Read>(reader: R, policy: NumericPolicy) -> Result<Catalog> {
    let (headers, rows) = read_table(reader)?;
    Catalog::load(&headers, rows, policy)
}

/// Load an ingredient catalog from a CSV file.
pub fn load_catalog<P: AsRef<Path>>(path: P, policy: NumericPolicy) -> Result<Catalog> {
    debug!(path = %path.as_ref().display(), "loading catalog");
    load_catalog_from_reader(File::open(path)?, policy)
}

/// Load recipe lines from CSV data with `ingredient,quantity,unit` columns.
///
/// Rows missing an ingredient or a quantity are skipped. An empty unit
/// means "use the catalog unit".
pub fn load_recipe_from_reader<R: Read>(reader: R) -> Result<Vec<RecipeLine>> {
    let (headers, rows) = read_table(reader)?;

    let position = |column: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(column))
    };

    let [Some(ingredient_col), Some(quantity_col), Some(unit_col)] =
        REQUIRED_RECIPE_COLUMNS.map(position)
    else {
        let missing = REQUIRED_RECIPE_COLUMNS
            .into_iter()
            .filter(|c| position(*c).is_none())
            .map(str::to_string)
            .collect();
        return Err(CostingError::Schema { missing });
    };

    let mut lines = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let line = idx + 2;
        let cell = |col: usize| row.get(col).map(|s| s.trim()).filter(|s| !s.is_empty());

        let (Some(ingredient), Some(quantity)) = (cell(ingredient_col), cell(quantity_col)) else {
            debug!(line, "skipping recipe row without ingredient or quantity");
            continue;
        };

        let quantity: f64 = quantity.parse().map_err(|_| {
            CostingError::Parse(format!(
                "line {}: quantity '{}' for '{}' is not a number",
                line, quantity, ingredient
            ))
        })?;

        lines.push(RecipeLine::new(ingredient, quantity, cell(unit_col)));
    }

    Ok(lines)
}

/// Load recipe lines from a CSV file.
pub fn load_recipe<P: AsRef<Path>>(path: P) -> Result<Vec<RecipeLine>> {
    debug!(path = %path.as_ref().display(), "loading recipe");
    load_recipe_from_reader(File::open(path)?)
}

/// Write a catalog as CSV with the canonical headers, in key order.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = REQUIRED_CATALOG_COLUMNS.to_vec();
    header.extend(NUTRITION_COLUMNS);
    wtr.write_record(&header)?;

    for record in catalog.sorted() {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        wtr.write_record([
            text(&record.item_code),
            record.name.clone(),
            text(&record.category),
            text(&record.stock_type),
            text(&record.brand),
            text(&record.supplier),
            record.package_quantity.to_string(),
            record.unit.clone(),
            record.package_price.to_string(),
            record.nutrition.calories.to_string(),
            record.nutrition.protein.to_string(),
            record.nutrition.carbs.to_string(),
            record.nutrition.fat.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RECIPE: &str = "\
ingredient,quantity,unit
Bacon,3,pcs
Eggs,2,
,4,pcs
Salt,,g
";

    #[test]
    fn test_recipe_rows_skipped_when_incomplete() {
        let lines = load_recipe_from_reader(SAMPLE_RECIPE.as_bytes()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], RecipeLine::new("Bacon", 3.0, Some("pcs")));
        assert_eq!(lines[1], RecipeLine::new("Eggs", 2.0, None));
    }

    #[test]
    fn test_recipe_missing_column() {
        let err = load_recipe_from_reader("ingredient,quantity\nBacon,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CostingError::Schema { missing } if missing == vec!["unit"]));
    }

    #[test]
    fn test_recipe_bad_quantity() {
        let err = load_recipe_from_reader("ingredient,quantity,unit\nBacon,three,pcs\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, CostingError::Parse(msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_catalog_from_reader_short_rows() {
        let data = "\
Item Code,Product Name,Category,Stock Type,Brand,Supplier,Quantity per Package,Unit,Price in $
B01,Bacon,Meat,Dry,-,Main,10,PCS,10.00
E01,Eggs,Dairy,Dry,-,Main,12,pcs
";
        let catalog = load_catalog_from_reader(data.as_bytes(), NumericPolicy::Lenient).unwrap();
        assert_eq!(catalog.lookup("bacon").unwrap().unit, "pcs");
        assert_eq!(catalog.lookup("eggs").unwrap().package_price, 0.0);
    }
}
