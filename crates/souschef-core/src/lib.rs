//! # Souschef Core Library
//!
//! Core business logic for Souschef, a guided cooking timer. A recipe is an
//! ordered list of timed steps; a cook session walks through them one step at
//! a time with a per-step countdown and an aggregate countdown across the
//! remaining steps.
//!
//! The library is UI-agnostic: any frontend (CLI, desktop shell) renders
//! session snapshots and forwards user commands to the same engine.
//!
//! ## Key Components
//!
//! - [`SessionEngine`]: Wall-clock-based session state machine. It has no
//!   internal thread; the caller invokes `tick()` periodically with the
//!   current time.
//! - [`Recipe`] / [`Step`]: Immutable recipe description consumed by the
//!   engine.
//! - [`SessionEvent`]: State changes produced by engine commands for the
//!   presentation layer.

pub mod error;
pub mod events;
pub mod recipe;
pub mod session;

pub use error::{SessionError, ValidationError};
pub use events::SessionEvent;
pub use recipe::{CookSettings, Difficulty, Ingredient, Recipe, RecipeTotals, Step, StepPayload};
pub use session::{Session, SessionEngine, SessionSnapshot};
