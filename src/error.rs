use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostingError {
    #[error("Schema error: missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Ingredient not found: {0}")]
    NotFound(String),

    #[error("Unit mismatch for '{ingredient}': catalog unit is '{expected}', got '{supplied}' (no unit conversion is performed)")]
    UnitMismatch {
        ingredient: String,
        expected: String,
        supplied: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CostingError>;
