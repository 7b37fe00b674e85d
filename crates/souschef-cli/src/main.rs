use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "souschef", version, about = "Souschef guided cooking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recipe inspection
    Recipe {
        #[command(subcommand)]
        action: commands::recipe::RecipeAction,
    },
    /// Run a guided cook session
    Cook {
        #[command(subcommand)]
        action: commands::cook::CookAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Recipe { action } => commands::recipe::run(action),
        Commands::Cook { action } => commands::cook::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
