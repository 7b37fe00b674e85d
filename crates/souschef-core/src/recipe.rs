//! Recipe model: an ordered, non-empty sequence of timed steps plus metadata.
//!
//! Recipes are immutable from the session engine's point of view. Every
//! command that needs the timeline shape receives the recipe by reference;
//! the engine never stores or mutates one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Base complexity weight used for the recipe complexity score.
    pub fn base_complexity(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    /// Amount in `unit`; must be positive.
    pub quantity: f64,
    /// 'g', 'ml', 'pcs', ...
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Machine settings for an automated cooking step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookSettings {
    /// Degrees Celsius, 40-200.
    pub temperature: u32,
    /// Stir speed, 1-5.
    pub speed: u32,
}

/// Step payload, discriminated by kind.
///
/// Modeling the two shapes as enum variants makes "exactly one payload,
/// matching the kind tag" impossible to violate; [`Recipe::validate`] only
/// has to check value ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepPayload {
    /// Automated step driven by the machine.
    Cooking { settings: CookSettings },
    /// Manual step; the cook handles the referenced ingredients.
    Instruction { ingredient_ids: Vec<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub description: String,
    /// Duration in whole minutes; must be positive.
    pub duration_min: u64,
    #[serde(flatten)]
    pub payload: StepPayload,
}

impl Step {
    pub fn new(description: impl Into<String>, duration_min: u64, payload: StepPayload) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            duration_min,
            payload,
        }
    }

    /// Step duration in seconds, saturating on overflow.
    pub fn duration_secs(&self) -> u64 {
        self.duration_min.saturating_mul(60)
    }
}

/// Derived recipe totals, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeTotals {
    pub total_time_min: u64,
    pub total_ingredients: usize,
    /// base(difficulty) x step count.
    pub complexity_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, difficulty: Difficulty, steps: Vec<Step>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            cuisine: None,
            difficulty,
            ingredients: Vec::new(),
            steps,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn total_duration_min(&self) -> u64 {
        self.steps.iter().map(|s| s.duration_min).sum()
    }

    pub fn total_duration_secs(&self) -> u64 {
        self.steps.iter().map(|s| s.duration_secs()).sum()
    }

    /// Seconds in `step_index` and every step after it.
    pub fn remaining_secs_from(&self, step_index: usize) -> u64 {
        self.steps
            .iter()
            .skip(step_index)
            .map(|s| s.duration_secs())
            .sum()
    }

    pub fn totals(&self) -> RecipeTotals {
        RecipeTotals {
            total_time_min: self.total_duration_min(),
            total_ingredients: self.ingredients.len(),
            complexity_score: self.difficulty.base_complexity() * self.steps.len() as u32,
        }
    }

    /// Authoring-time validation. The session engine assumes validated
    /// input; malformed recipes must be rejected here and never reach it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.steps.is_empty() {
            return Err(ValidationError::EmptySteps);
        }
        for ing in &self.ingredients {
            if ing.quantity <= 0.0 {
                return Err(ValidationError::NonPositiveQuantity {
                    ingredient_id: ing.id.clone(),
                });
            }
        }
        for step in &self.steps {
            if step.duration_min == 0 {
                return Err(ValidationError::NonPositiveDuration {
                    step_id: step.id.clone(),
                });
            }
            match &step.payload {
                StepPayload::Cooking { settings } => {
                    if !(40..=200).contains(&settings.temperature) {
                        return Err(ValidationError::TemperatureOutOfRange {
                            step_id: step.id.clone(),
                            temperature: settings.temperature,
                        });
                    }
                    if !(1..=5).contains(&settings.speed) {
                        return Err(ValidationError::SpeedOutOfRange {
                            step_id: step.id.clone(),
                            speed: settings.speed,
                        });
                    }
                }
                StepPayload::Instruction { ingredient_ids } => {
                    if ingredient_ids.is_empty() {
                        return Err(ValidationError::NoIngredientRefs {
                            step_id: step.id.clone(),
                        });
                    }
                    for id in ingredient_ids {
                        if !self.ingredients.iter().any(|i| &i.id == id) {
                            return Err(ValidationError::UnknownIngredient {
                                step_id: step.id.clone(),
                                ingredient_id: id.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
