use std::io::{BufRead, Write};

use crate::costing::constants::{
    DEFAULT_SUGGESTION_LIMIT, FUZZY_MATCH_LIMIT, INTERACTIVE_SENTINELS,
};
use crate::costing::{resolve_line, Catalog};
use crate::error::{CostingError, Result};
use crate::models::RecipeLine;

/// One parsed line of interactive recipe input.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Line(RecipeLine),
    Blank,
    Done,
}

/// Parse `ingredient,quantity[,unit]`, a blank line, or a sentinel word.
pub fn parse_entry(input: &str) -> Result<Entry> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Entry::Blank);
    }
    if INTERACTIVE_SENTINELS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(input))
    {
        return Ok(Entry::Done);
    }

    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let (name, quantity, unit) = match parts.as_slice() {
        [name, quantity] => (*name, *quantity, None),
        [name, quantity, unit] => (*name, *quantity, Some(*unit).filter(|u| !u.is_empty())),
        _ => {
            return Err(CostingError::Parse(format!(
                "expected 'ingredient,quantity,unit', got '{}'",
                input
            )));
        }
    };

    if name.is_empty() {
        return Err(CostingError::Parse("ingredient name is empty".to_string()));
    }

    let quantity: f64 = quantity
        .parse()
        .map_err(|_| CostingError::Parse(format!("quantity '{}' is not a number", quantity)))?;

    Ok(Entry::Line(RecipeLine::new(name, quantity, unit)))
}

/// Hint listing catalog names close to an unknown one.
fn unknown_name_hint(catalog: &Catalog, name: &str) -> String {
    let mut names: Vec<&str> = catalog.suggest(name, DEFAULT_SUGGESTION_LIMIT);
    for candidate in catalog.closest_names(name, FUZZY_MATCH_LIMIT) {
        if !names.contains(&candidate) {
            names.push(candidate);
        }
    }

    if names.is_empty() {
        format!("No ingredient matches '{}'.", name.trim())
    } else {
        format!("Did you mean: {}?", names.join(", "))
    }
}

/// Read recipe lines until a sentinel ("fin", "salir", "exit") or EOF.
///
/// Each line is checked against the catalog as it is entered; malformed
/// lines, unknown names and unit mismatches are reported and re-asked.
pub fn read_recipe_lines<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    catalog: &Catalog,
) -> Result<Vec<RecipeLine>> {
    writeln!(
        output,
        "Enter lines as 'ingredient,quantity,unit' and '{}' to finish.",
        INTERACTIVE_SENTINELS[0]
    )?;

    let mut lines = Vec::new();
    let mut buf = String::new();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            break;
        }

        let line = match parse_entry(&buf) {
            Ok(Entry::Done) => break,
            Ok(Entry::Blank) => continue,
            Ok(Entry::Line(line)) => line,
            Err(e) => {
                writeln!(output, "{}", e)?;
                writeln!(output, "Format: ingredient,quantity,unit")?;
                continue;
            }
        };

        match resolve_line(catalog, &line) {
            Ok((ingredient, unit)) => {
                writeln!(output, "Added: {} {} of {}", line.quantity, unit, ingredient.name)?;
                lines.push(line);
            }
            Err(CostingError::NotFound(name)) => {
                writeln!(output, "Ingredient '{}' not found.", name)?;
                writeln!(output, "{}", unknown_name_hint(catalog, &name))?;
            }
            Err(CostingError::UnitMismatch { expected, .. }) => {
                writeln!(output, "Wrong unit for '{}'. Use: {}", line.ingredient, expected)?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(lines)
}
