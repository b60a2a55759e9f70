use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use menu_costing_rs::cli::{Cli, Command, ProfitArgs, RecipeArgs, USAGE_EXAMPLES};
use menu_costing_rs::costing::constants::*;
use menu_costing_rs::costing::{analyze_profit, compute_recipe, Catalog, NumericPolicy};
use menu_costing_rs::error::Result;
use menu_costing_rs::interface::{
    display_calorie_reference, display_catalog, display_profit_analysis, display_recipe_result,
    display_suggestions, prompt_ingredient, prompt_yes_no,
};
use menu_costing_rs::io::{load_catalog, load_recipe, read_recipe_lines, save_catalog};
use menu_costing_rs::logging::init_logging;
use menu_costing_rs::models::{ProfitInput, RecipeLine};

/// Exit status for missing required inputs.
const EXIT_USAGE: i32 = 2;

fn main() {
    match run() {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        print_usage()?;
        return Ok(0);
    };

    match command {
        Command::Recipe(args) => cmd_recipe(args),
        Command::Profit(args) => cmd_profit(&args),
        Command::Ingredients {
            catalog,
            prefix,
            limit,
            strict_numbers,
            json,
        } => cmd_ingredients(&catalog, prefix.as_deref(), limit, policy(strict_numbers), json),
        Command::Register { catalog } => cmd_register(&catalog),
        Command::Calories => {
            display_calorie_reference();
            Ok(0)
        }
        Command::Selftest => cmd_selftest(),
    }
}

fn print_usage() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    println!("{}", USAGE_EXAMPLES);
    Ok(())
}

fn policy(strict_numbers: bool) -> NumericPolicy {
    if strict_numbers {
        NumericPolicy::Strict
    } else {
        NumericPolicy::Lenient
    }
}

/// Cost a recipe from a CSV file or interactive entry.
fn cmd_recipe(mut args: RecipeArgs) -> Result<i32> {
    if args.demo {
        if !(Path::new(DEMO_CATALOG_PATH).exists() && Path::new(DEMO_RECIPE_PATH).exists()) {
            println!(
                "Demo files not found ({}, {}). Use --catalog and --recipe.",
                DEMO_CATALOG_PATH, DEMO_RECIPE_PATH
            );
            return Ok(EXIT_USAGE);
        }
        info!("running recipe demo");
        args.catalog = Some(DEMO_CATALOG_PATH.into());
        args.recipe = Some(DEMO_RECIPE_PATH.into());
        args.servings = DEMO_SERVINGS;
        args.target_food_cost_pct = DEMO_TARGET_FOOD_COST_PCT;
        args.actual_menu_price = Some(DEMO_ACTUAL_MENU_PRICE);
    }

    let Some(catalog_path) = args.catalog.as_deref() else {
        println!("Missing --catalog. See the usage examples:");
        println!("{}", USAGE_EXAMPLES);
        return Ok(EXIT_USAGE);
    };

    if !args.interactive && args.recipe.is_none() {
        println!("Missing --recipe (or use --interactive). See the usage examples:");
        println!("{}", USAGE_EXAMPLES);
        return Ok(EXIT_USAGE);
    }

    let catalog = load_catalog(catalog_path, policy(args.strict_numbers))?;
    debug!(ingredients = catalog.len(), "catalog ready");

    let lines: Vec<RecipeLine> = match (&args.recipe, args.interactive) {
        (_, true) => {
            let stdin = std::io::stdin();
            // Keep stdout clean for JSON output.
            if args.json {
                read_recipe_lines(stdin.lock(), std::io::stderr(), &catalog)?
            } else {
                read_recipe_lines(stdin.lock(), std::io::stdout(), &catalog)?
            }
        }
        (Some(recipe_path), false) => load_recipe(recipe_path)?,
        (None, false) => Vec::new(),
    };

    let result = compute_recipe(
        &catalog,
        &lines,
        args.servings,
        args.target_food_cost_pct,
        args.actual_menu_price,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_recipe_result(&result);
    }

    Ok(0)
}

/// Run the profit and what-if breakdown.
fn cmd_profit(args: &ProfitArgs) -> Result<i32> {
    let analysis = analyze_profit(&ProfitInput {
        sales: args.sales,
        food_cost: args.food_cost,
        labor_cost: args.labor_cost,
        overhead: args.overhead,
        whatif_foodcost_delta_pct: args.whatif_foodcost_delta_pct,
        whatif_sales_delta_pct: args.whatif_sales_delta_pct,
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        display_profit_analysis(&analysis);
    }

    Ok(0)
}

/// List the catalog, or the names matching a prefix.
fn cmd_ingredients(
    catalog_path: &Path,
    prefix: Option<&str>,
    limit: usize,
    policy: NumericPolicy,
    json: bool,
) -> Result<i32> {
    let catalog = load_catalog(catalog_path, policy)?;

    match (prefix, json) {
        (Some(prefix), true) => {
            let names = catalog.suggest(prefix, limit);
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        (Some(prefix), false) => {
            display_suggestions(prefix, &catalog.suggest(prefix, limit));
        }
        (None, true) => println!("{}", serde_json::to_string_pretty(&catalog.sorted())?),
        (None, false) => display_catalog(&catalog.sorted()),
    }

    Ok(0)
}

/// Register new ingredients and write the merged catalog back.
fn cmd_register(catalog_path: &Path) -> Result<i32> {
    let catalog = if catalog_path.exists() {
        load_catalog(catalog_path, NumericPolicy::Lenient)?
    } else {
        println!("Starting a new catalog at {}", catalog_path.display());
        Catalog::default()
    };

    println!("Loaded {} ingredients", catalog.len());
    println!();

    let mut pending = Vec::new();
    while let Some(record) = prompt_ingredient(&catalog, &pending)? {
        pending.push(record);
        println!();
    }

    if pending.is_empty() {
        println!("No ingredients registered.");
        return Ok(0);
    }

    if prompt_yes_no(&format!("Save {} new ingredients?", pending.len()), true)? {
        let count = pending.len();
        let merged = Catalog::from_records(catalog.sorted().into_iter().cloned().chain(pending));
        save_catalog(catalog_path, &merged)?;
        info!(added = count, total = merged.len(), "catalog saved");
        println!("Catalog saved ({} ingredients).", merged.len());
    }

    Ok(0)
}

/// Check the core calculations against the reference spreadsheet figures.
fn cmd_selftest() -> Result<i32> {
    let headers = REQUIRED_CATALOG_COLUMNS;
    let rows = vec![
        ["B01", "Bacon", "Meat", "Dry", "-", "Main", "10", "pcs", "10.0"],
        ["E01", "Eggs", "Dairy", "Dry", "-", "Main", "12", "pcs", "6.0"],
    ]
    .into_iter()
    .map(|row| row.map(str::to_string).to_vec());

    let catalog = Catalog::load(&headers, rows, NumericPolicy::Strict)?;
    let lines = vec![
        RecipeLine::new("Bacon", 3.0, Some("pcs")),
        RecipeLine::new("Eggs", 2.0, Some("pcs")),
    ];
    let recipe = compute_recipe(&catalog, &lines, 12.0, 30.0, Some(4.99))?;

    assert_eq!(recipe.total_cost, 4.0, "{:?}", recipe);
    assert_eq!(recipe.cost_per_serving, 0.33, "{:?}", recipe);
    assert_eq!(recipe.target_menu_price, 1.11, "{:?}", recipe);
    let actual_pct = recipe.comparison.as_ref().map(|c| c.actual_food_cost_pct);
    assert_eq!(actual_pct, Some(6.7), "{:?}", recipe);

    let profit = analyze_profit(&ProfitInput {
        sales: 100_000.0,
        food_cost: 36_000.0,
        labor_cost: 30_000.0,
        overhead: 24_000.0,
        whatif_foodcost_delta_pct: Some(-5.0),
        whatif_sales_delta_pct: None,
    });

    assert_eq!(profit.prime_costs, 66_000.0, "{:?}", profit);
    assert_eq!(profit.total_costs, 90_000.0, "{:?}", profit);
    assert_eq!(profit.profit, 10_000.0, "{:?}", profit);
    assert_eq!(profit.profit_pct, 10.0, "{:?}", profit);
    assert_eq!(profit.whatif_foodcost_profit_delta, Some(1_800.0), "{:?}", profit);

    println!("SELFTEST OK: core calculations match the reference spreadsheet.");
    Ok(0)
}
