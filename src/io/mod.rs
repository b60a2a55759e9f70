mod interactive;
mod tabular;

pub use interactive::{parse_entry, read_recipe_lines, Entry};
pub use tabular::{
    load_catalog, load_catalog_from_reader, load_recipe, load_recipe_from_reader, save_catalog,
};
