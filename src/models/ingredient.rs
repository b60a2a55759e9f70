use serde::{Deserialize, Serialize};

/// Nutrition per catalog unit (e.g. per gram, per piece).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionFacts {
    /// True when no nutrition column carried a value.
    pub fn is_empty(&self) -> bool {
        self.calories == 0.0 && self.protein == 0.0 && self.carbs == 0.0 && self.fat == 0.0
    }

    /// Facts scaled by a quantity of catalog units.
    pub fn scaled(&self, quantity: f64) -> Self {
        Self {
            calories: self.calories * quantity,
            protein: self.protein * quantity,
            carbs: self.carbs * quantity,
            fat: self.fat * quantity,
        }
    }
}

impl std::ops::AddAssign for NutritionFacts {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}

/// One purchasable product in the catalog.
///
/// The unit is stored lowercase; the name keeps its original casing and is
/// matched case-insensitively through [`IngredientRecord::key`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub item_code: Option<String>,
    pub name: String,
    pub category: Option<String>,
    pub stock_type: Option<String>,
    pub brand: Option<String>,
    pub supplier: Option<String>,
    pub package_quantity: f64,
    pub unit: String,
    pub package_price: f64,
    #[serde(default, skip_serializing_if = "NutritionFacts::is_empty")]
    pub nutrition: NutritionFacts,
}

impl IngredientRecord {
    /// Price of one catalog unit. Zero when the package quantity is zero.
    #[inline]
    pub fn unit_price(&self) -> f64 {
        if self.package_quantity != 0.0 {
            self.package_price / self.package_quantity
        } else {
            0.0
        }
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        normalize_key(&self.name)
    }
}

/// Normalize a product name into its catalog key.
pub(crate) fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(quantity: f64, price: f64) -> IngredientRecord {
        IngredientRecord {
            item_code: Some("B01".to_string()),
            name: "Bacon".to_string(),
            category: Some("Meat".to_string()),
            stock_type: Some("Dry".to_string()),
            brand: None,
            supplier: Some("Main".to_string()),
            package_quantity: quantity,
            unit: "pcs".to_string(),
            package_price: price,
            nutrition: NutritionFacts::default(),
        }
    }

    #[test]
    fn test_unit_price() {
        let record = sample_record(10.0, 10.0);
        assert!((record.unit_price() - 1.0).abs() < 1e-12);

        let eggs = sample_record(12.0, 6.0);
        assert!((eggs.unit_price() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unit_price_zero_quantity() {
        let record = sample_record(0.0, 10.0);
        assert_eq!(record.unit_price(), 0.0);
    }

    #[test]
    fn test_key_is_trimmed_lowercase() {
        let mut record = sample_record(1.0, 1.0);
        record.name = "  Smoked BACON ".to_string();
        assert_eq!(record.key(), "smoked bacon");
    }

    #[test]
    fn test_nutrition_scaled() {
        let facts = NutritionFacts {
            calories: 70.0,
            protein: 6.0,
            carbs: 1.0,
            fat: 5.0,
        };
        let scaled = facts.scaled(3.0);
        assert!((scaled.calories - 210.0).abs() < 1e-9);
        assert!((scaled.fat - 15.0).abs() < 1e-9);
        assert!(!scaled.is_empty());
        assert!(NutritionFacts::default().is_empty());
    }
}
