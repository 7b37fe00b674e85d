use std::path::PathBuf;

use clap::Subcommand;

use super::load_recipe;

#[derive(Subcommand)]
pub enum RecipeAction {
    /// Print a recipe summary
    Show {
        /// Recipe TOML file
        file: PathBuf,
        /// Print the full recipe as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a recipe file for authoring errors
    Validate {
        /// Recipe TOML file
        file: PathBuf,
    },
}

pub fn run(action: RecipeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RecipeAction::Show { file, json } => {
            let recipe = load_recipe(&file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
                return Ok(());
            }
            let totals = recipe.totals();
            println!("{} ({:?})", recipe.title, recipe.difficulty);
            if let Some(cuisine) = &recipe.cuisine {
                println!("  cuisine: {cuisine}");
            }
            println!("  steps: {}", recipe.steps.len());
            println!("  total time: {} min", totals.total_time_min);
            println!("  ingredients: {}", totals.total_ingredients);
            println!("  complexity: {}", totals.complexity_score);
        }
        RecipeAction::Validate { file } => {
            let recipe = load_recipe(&file)?;
            println!("ok: '{}' is valid", recipe.title);
        }
    }
    Ok(())
}
