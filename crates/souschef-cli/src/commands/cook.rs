//! Interactive cook session runner.
//!
//! The loop here is the Tick Source: it sleeps roughly one second, samples
//! the wall clock, and hands the timestamp to the engine. All timing logic
//! lives in `souschef_core`; late or missed iterations are corrected there.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use clap::Subcommand;
use souschef_core::{SessionEngine, SessionEvent};

use super::load_recipe;

#[derive(Subcommand)]
pub enum CookAction {
    /// Cook a recipe start to finish
    Run {
        /// Recipe TOML file
        file: PathBuf,
    },
}

fn fmt_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn run(action: CookAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CookAction::Run { file } => {
            let recipe = load_recipe(&file)?;
            let mut engine = SessionEngine::new();
            engine.start(&recipe, Utc::now())?;

            println!("Cooking '{}' ({} steps)", recipe.title, recipe.steps.len());
            println!("Step 1: {}", recipe.steps[0].description);

            loop {
                std::thread::sleep(Duration::from_secs(1));
                let events = engine.tick(&recipe, Utc::now());
                for event in &events {
                    match event {
                        SessionEvent::StepAdvanced { step_index, .. } => {
                            println!();
                            println!(
                                "Step {}: {}",
                                step_index + 1,
                                recipe.steps[*step_index].description
                            );
                        }
                        SessionEvent::SessionCompleted { .. } => {
                            println!();
                            println!("Done. Enjoy!");
                        }
                        _ => {}
                    }
                }

                let Some(snap) = engine.snapshot() else { break };
                print!(
                    "\r  step {}  overall {}   ",
                    fmt_clock(snap.step_remaining_secs),
                    fmt_clock(snap.overall_remaining_secs)
                );
                std::io::stdout().flush()?;
            }
        }
    }
    Ok(())
}
