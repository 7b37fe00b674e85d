pub mod cook;
pub mod recipe;

use std::path::Path;

use souschef_core::Recipe;

/// Load and validate a recipe from a TOML file.
pub fn load_recipe(path: &Path) -> Result<Recipe, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let recipe: Recipe = toml::from_str(&raw)?;
    recipe.validate()?;
    Ok(recipe)
}
