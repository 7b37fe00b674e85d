//! Error types for souschef-core.
//!
//! Session conflicts are the only runtime failure the engine reports;
//! everything else it tolerates as a silent no-op. Validation errors are
//! raised at recipe authoring/load time and never inside the engine.

use thiserror::Error;

/// Errors produced by session engine commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A session is already active; starting another is rejected without
    /// touching the existing one.
    #[error("A cook session for recipe '{active}' is already active (requested '{requested}')")]
    Conflict { active: String, requested: String },
}

/// Errors produced by [`Recipe::validate`](crate::Recipe::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Recipe has no steps")]
    EmptySteps,

    #[error("Step '{step_id}' has a non-positive duration")]
    NonPositiveDuration { step_id: String },

    #[error("Instruction step '{step_id}' references no ingredients")]
    NoIngredientRefs { step_id: String },

    #[error("Step '{step_id}' references unknown ingredient '{ingredient_id}'")]
    UnknownIngredient {
        step_id: String,
        ingredient_id: String,
    },

    #[error("Step '{step_id}' temperature {temperature} outside 40-200")]
    TemperatureOutOfRange { step_id: String, temperature: u32 },

    #[error("Step '{step_id}' speed {speed} outside 1-5")]
    SpeedOutOfRange { step_id: String, speed: u32 },

    #[error("Ingredient '{ingredient_id}' has a non-positive quantity")]
    NonPositiveQuantity { ingredient_id: String },
}
