use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::{debug, info, warn};

use crate::costing::constants::*;
use crate::error::{CostingError, Result};
use crate::models::{IngredientRecord, NutritionFacts, normalize_key};

/// How unparseable numeric catalog cells are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Coerce to 0.0 and log a warning, like a spreadsheet import.
    #[default]
    Lenient,
    /// Reject the catalog with [`CostingError::Parse`].
    Strict,
}

/// Column positions resolved from a header row.
#[derive(Debug, Clone)]
struct CatalogSchema {
    item_code: usize,
    name: usize,
    category: usize,
    stock_type: usize,
    brand: usize,
    supplier: usize,
    package_quantity: usize,
    unit: usize,
    price: usize,
    nutrition: [Option<usize>; 4],
}

impl CatalogSchema {
    fn resolve<H: AsRef<str>>(headers: &[H]) -> Result<Self> {
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().trim().eq_ignore_ascii_case(column))
        };

        let mut missing = Vec::new();
        let mut indices = [0usize; 9];
        for (slot, column) in indices.iter_mut().zip(REQUIRED_CATALOG_COLUMNS) {
            let found = if column == COL_PRICE {
                position(COL_PRICE).or_else(|| position(COL_PRICE_ALIAS))
            } else {
                position(column)
            };
            match found {
                Some(idx) => *slot = idx,
                None => missing.push(column.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(CostingError::Schema { missing });
        }

        Ok(Self {
            item_code: indices[0],
            name: indices[1],
            category: indices[2],
            stock_type: indices[3],
            brand: indices[4],
            supplier: indices[5],
            package_quantity: indices[6],
            unit: indices[7],
            price: indices[8],
            nutrition: NUTRITION_COLUMNS.map(position),
        })
    }
}

/// Read-only ingredient lookup table keyed by lowercase product name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: HashMap<String, IngredientRecord>,
}

impl Catalog {
    /// Build a catalog from already-typed records.
    ///
    /// Duplicate names (case-insensitive) keep the last record.
    pub fn from_records(records: impl IntoIterator<Item = IngredientRecord>) -> Self {
        let mut ingredients = HashMap::new();
        for record in records {
            ingredients.insert(record.key(), record);
        }
        Self { ingredients }
    }

    /// Parse raw tabular rows into a catalog.
    ///
    /// `headers` names the cells of every row. Rows with an empty product
    /// name are skipped. Numeric cells follow `policy`.
    pub fn load<H, R>(headers: &[H], rows: R, policy: NumericPolicy) -> Result<Self>
    where
        H: AsRef<str>,
        R: IntoIterator<Item = Vec<String>>,
    {
        let schema = CatalogSchema::resolve(headers)?;
        let mut records = Vec::new();

        for (idx, row) in rows.into_iter().enumerate() {
            // Data rows start on line 2, after the header.
            let line = idx + 2;
            match parse_row(&schema, &row, line, policy)? {
                Some(record) => records.push(record),
                None => debug!(line, "skipping catalog row without a product name"),
            }
        }

        let catalog = Self::from_records(records);
        info!(ingredients = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Case-insensitive exact lookup on the trimmed name.
    pub fn lookup(&self, name: &str) -> Result<&IngredientRecord> {
        self.ingredients
            .get(&normalize_key(name))
            .ok_or_else(|| CostingError::NotFound(name.trim().to_string()))
    }

    /// Check whether a name resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.contains_key(&normalize_key(name))
    }

    /// Names whose lowercase form starts with the lowercase prefix.
    ///
    /// Results follow ascending key order (lowercase name), capped at `limit`.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        let mut keys: Vec<&String> = self
            .ingredients
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .collect();
        keys.sort();

        keys.into_iter()
            .take(limit)
            .map(|k| self.ingredients[k].name.as_str())
            .collect()
    }

    /// Names similar to `query`, best match first.
    pub fn closest_names(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = normalize_key(query);
        let mut candidates: Vec<(&IngredientRecord, f64)> = self
            .ingredients
            .iter()
            .map(|(key, record)| (record, jaro_winkler(key, &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name.cmp(&b.0.name))
        });

        candidates
            .into_iter()
            .take(limit)
            .map(|(record, _)| record.name.as_str())
            .collect()
    }

    /// All records in ascending key order.
    pub fn sorted(&self) -> Vec<&IngredientRecord> {
        let mut records: Vec<&IngredientRecord> = self.ingredients.values().collect();
        records.sort_by_key(|r| r.key());
        records
    }

    /// Count of ingredients in the catalog.
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Check if the catalog has no ingredients.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

fn parse_row(
    schema: &CatalogSchema,
    row: &[String],
    line: usize,
    policy: NumericPolicy,
) -> Result<Option<IngredientRecord>> {
    let cell = move |idx: usize| {
        row.get(idx)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    };
    let text = |idx: usize| cell(idx).map(str::to_string);

    let Some(name) = cell(schema.name) else {
        return Ok(None);
    };

    let number = |idx: usize, column: &str, required: bool| {
        parse_number(cell(idx), column, name, line, required, policy)
    };
    let optional = |idx: Option<usize>, column: &str| match idx {
        Some(idx) => number(idx, column, false),
        None => Ok(0.0),
    };

    let nutrition = NutritionFacts {
        calories: optional(schema.nutrition[0], COL_CALORIES)?,
        protein: optional(schema.nutrition[1], COL_PROTEIN)?,
        carbs: optional(schema.nutrition[2], COL_CARBS)?,
        fat: optional(schema.nutrition[3], COL_FAT)?,
    };

    Ok(Some(IngredientRecord {
        item_code: text(schema.item_code),
        name: name.to_string(),
        category: text(schema.category),
        stock_type: text(schema.stock_type),
        brand: text(schema.brand),
        supplier: text(schema.supplier),
        package_quantity: number(schema.package_quantity, COL_PACKAGE_QUANTITY, true)?,
        unit: cell(schema.unit).unwrap_or_default().to_lowercase(),
        package_price: number(schema.price, COL_PRICE, true)?,
        nutrition,
    }))
}

fn parse_number(
    raw: Option<&str>,
    column: &str,
    name: &str,
    line: usize,
    required: bool,
    policy: NumericPolicy,
) -> Result<f64> {
    let problem = match raw {
        Some(value) => match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => return Ok(parsed),
            _ => format!("'{}' is not a number", value),
        },
        None if !required => return Ok(0.0),
        None => "value is empty".to_string(),
    };

    match policy {
        NumericPolicy::Lenient => {
            warn!(line, ingredient = name, column, "{}; using 0", problem);
            Ok(0.0)
        }
        NumericPolicy::Strict => Err(CostingError::Parse(format!(
            "line {}: {} for '{}': {}",
            line, column, name, problem
        ))),
    }
}
