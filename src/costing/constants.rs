// ─────────────────────────────────────────────────────────────────────────────
// Calculation defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Servings assumed when none are given.
pub const DEFAULT_SERVINGS: f64 = 1.0;

/// Food-cost percentage used to derive the target menu price.
pub const DEFAULT_TARGET_FOOD_COST_PCT: f64 = 30.0;

/// Maximum names returned by a catalog prefix suggestion.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Decimal places for money amounts and most recipe ratios.
pub const MONEY_DECIMALS: u32 = 2;

/// Decimal places for "percent of" figures matched against the spreadsheet.
pub const PERCENT_DECIMALS: u32 = 1;

/// Decimal places for nutrition figures.
pub const NUTRITION_DECIMALS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog columns
// ─────────────────────────────────────────────────────────────────────────────

pub const COL_ITEM_CODE: &str = "Item Code";
pub const COL_PRODUCT_NAME: &str = "Product Name";
pub const COL_CATEGORY: &str = "Category";
pub const COL_STOCK_TYPE: &str = "Stock Type";
pub const COL_BRAND: &str = "Brand";
pub const COL_SUPPLIER: &str = "Supplier";
pub const COL_PACKAGE_QUANTITY: &str = "Quantity per Package";
pub const COL_UNIT: &str = "Unit";
pub const COL_PRICE: &str = "Price";

/// Spreadsheet exports label the price column with its currency.
pub const COL_PRICE_ALIAS: &str = "Price in $";

pub const COL_CALORIES: &str = "Calories";
pub const COL_PROTEIN: &str = "Protein";
pub const COL_CARBS: &str = "Carbs";
pub const COL_FAT: &str = "Fat";

/// Columns every catalog must carry, in canonical order.
pub const REQUIRED_CATALOG_COLUMNS: [&str; 9] = [
    COL_ITEM_CODE,
    COL_PRODUCT_NAME,
    COL_CATEGORY,
    COL_STOCK_TYPE,
    COL_BRAND,
    COL_SUPPLIER,
    COL_PACKAGE_QUANTITY,
    COL_UNIT,
    COL_PRICE,
];

/// Optional per-unit nutrition columns.
pub const NUTRITION_COLUMNS: [&str; 4] = [COL_CALORIES, COL_PROTEIN, COL_CARBS, COL_FAT];

// ─────────────────────────────────────────────────────────────────────────────
// Recipe input
// ─────────────────────────────────────────────────────────────────────────────

pub const COL_RECIPE_INGREDIENT: &str = "ingredient";
pub const COL_RECIPE_QUANTITY: &str = "quantity";
pub const COL_RECIPE_UNIT: &str = "unit";

pub const REQUIRED_RECIPE_COLUMNS: [&str; 3] =
    [COL_RECIPE_INGREDIENT, COL_RECIPE_QUANTITY, COL_RECIPE_UNIT];

/// Words that end interactive recipe entry (case-insensitive).
pub const INTERACTIVE_SENTINELS: [&str; 3] = ["fin", "salir", "exit"];

/// Jaro-Winkler similarity above which a name counts as "did you mean".
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered for an unknown name.
pub const FUZZY_MATCH_LIMIT: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie bands (per serving)
// ─────────────────────────────────────────────────────────────────────────────

pub const CALORIES_LOW_BELOW: f64 = 200.0;
pub const CALORIES_MODERATE_BELOW: f64 = 400.0;
pub const CALORIES_HIGH_BELOW: f64 = 600.0;

// ─────────────────────────────────────────────────────────────────────────────
// Demo run
// ─────────────────────────────────────────────────────────────────────────────

pub const DEMO_CATALOG_PATH: &str = "data/ingredients_example.csv";
pub const DEMO_RECIPE_PATH: &str = "data/recipe_example.csv";
pub const DEMO_SERVINGS: f64 = 12.0;
pub const DEMO_TARGET_FOOD_COST_PCT: f64 = 30.0;
pub const DEMO_ACTUAL_MENU_PRICE: f64 = 4.99;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie reference (approximate, per 100 g unless the portion says otherwise)
// ─────────────────────────────────────────────────────────────────────────────

/// Food, kcal, protein (g), carbs (g), fat (g).
pub type ReferenceFood = (&'static str, f64, f64, f64, f64);

/// Common foods grouped by category, for filling in catalog nutrition columns.
pub const CALORIE_REFERENCE: [(&str, &[ReferenceFood]); 6] = [
    (
        "Meat and protein",
        &[
            ("Chicken breast (skinless)", 165.0, 31.0, 0.0, 3.6),
            ("Beef (lean)", 250.0, 26.0, 0.0, 15.0),
            ("Pork loin", 242.0, 27.0, 0.0, 14.0),
            ("Salmon", 208.0, 25.0, 0.0, 12.0),
            ("Egg (each)", 70.0, 6.0, 1.0, 5.0),
        ],
    ),
    (
        "Dairy",
        &[
            ("Whole milk (100 ml)", 61.0, 3.2, 4.5, 3.25),
            ("Cheddar cheese", 402.0, 25.0, 1.3, 33.0),
            ("Plain yogurt", 59.0, 10.0, 3.6, 0.4),
        ],
    ),
    (
        "Grains",
        &[
            ("White rice (cooked)", 130.0, 2.7, 28.0, 0.3),
            ("Whole wheat bread (slice)", 69.0, 3.6, 12.0, 1.2),
            ("Pasta (cooked)", 131.0, 5.0, 25.0, 1.1),
            ("Wheat flour", 364.0, 10.0, 76.0, 1.0),
        ],
    ),
    (
        "Vegetables",
        &[
            ("Tomato", 18.0, 0.9, 3.9, 0.2),
            ("Onion", 40.0, 1.1, 9.3, 0.1),
            ("Carrot", 41.0, 0.9, 9.6, 0.2),
            ("Lettuce", 15.0, 1.4, 2.9, 0.2),
        ],
    ),
    (
        "Fruit",
        &[
            ("Apple", 52.0, 0.3, 14.0, 0.2),
            ("Banana", 89.0, 1.1, 23.0, 0.3),
            ("Orange", 47.0, 0.9, 12.0, 0.1),
        ],
    ),
    (
        "Fats and oils",
        &[
            ("Olive oil (1 tbsp)", 119.0, 0.0, 0.0, 13.5),
            ("Butter (1 tbsp)", 102.0, 0.1, 0.0, 11.5),
            ("Avocado", 160.0, 2.0, 9.0, 15.0),
        ],
    ),
];

/// Energy per gram of each macronutrient.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
