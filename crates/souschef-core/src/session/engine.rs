//! Cook session engine.
//!
//! A wall-clock-based state machine. It has no internal thread and never
//! blocks - the caller invokes `tick()` periodically with the current time,
//! and the engine reconstructs remaining time from the elapsed real time
//! rather than counting callbacks. Missed or late ticks therefore cannot
//! make the countdown drift.
//!
//! ## State transitions
//!
//! ```text
//! (no session) -> running <-> paused
//!       ^           |
//!       +-- last step exhausted or stopped
//! ```
//!
//! At most one session is active at a time; `start()` on a busy engine is
//! rejected without touching the existing session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::events::SessionEvent;
use crate::recipe::Recipe;

/// Runtime state for one recipe being cooked.
///
/// The recipe itself is not stored here; commands that need the timeline
/// shape receive it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub recipe_id: String,
    pub current_step_index: usize,
    pub is_running: bool,
    pub step_remaining_secs: u64,
    /// Seconds remaining in the current step plus all following steps.
    /// Recomputed from the recipe at every step transition.
    pub overall_remaining_secs: u64,
    /// Wall-clock time of the last time-advancing event; `None` while paused.
    pub last_sample: Option<DateTime<Utc>>,
}

/// Read-only view of the active session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub recipe_id: String,
    pub current_step_index: usize,
    pub is_running: bool,
    pub step_remaining_secs: u64,
    pub overall_remaining_secs: u64,
}

/// Session state machine. Owns the single active-session slot.
#[derive(Debug, Default)]
pub struct SessionEngine {
    active: Option<Session>,
}

impl SessionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Recipe id of the in-progress session, if any. Lets the caller show
    /// a persistent mini-indicator while the user navigates elsewhere.
    pub fn active_recipe_id(&self) -> Option<&str> {
        self.active.as_ref().map(|s| s.recipe_id.as_str())
    }

    pub fn session(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.active.as_ref().map(|s| SessionSnapshot {
            recipe_id: s.recipe_id.clone(),
            current_step_index: s.current_step_index,
            is_running: s.is_running,
            step_remaining_secs: s.step_remaining_secs,
            overall_remaining_secs: s.overall_remaining_secs,
        })
    }

    /// 0.0 .. 1.0 progress within the current step.
    pub fn step_progress(&self, recipe: &Recipe) -> f64 {
        let Some(sess) = &self.active else { return 0.0 };
        let total = recipe
            .steps
            .get(sess.current_step_index)
            .map(|s| s.duration_secs())
            .unwrap_or(0);
        if total == 0 {
            return 0.0;
        }
        1.0 - (sess.step_remaining_secs as f64 / total as f64)
    }

    /// 0.0 .. 1.0 progress across the whole recipe.
    pub fn overall_progress(&self, recipe: &Recipe) -> f64 {
        let Some(sess) = &self.active else { return 0.0 };
        let total = recipe.total_duration_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (sess.overall_remaining_secs as f64 / total as f64)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin cooking `recipe` from its first step.
    ///
    /// Rejected with [`SessionError::Conflict`] while any session is active,
    /// including one for the same recipe; the existing session is untouched.
    pub fn start(
        &mut self,
        recipe: &Recipe,
        now: DateTime<Utc>,
    ) -> Result<SessionEvent, SessionError> {
        if let Some(active) = &self.active {
            return Err(SessionError::Conflict {
                active: active.recipe_id.clone(),
                requested: recipe.id.clone(),
            });
        }
        let first_secs = recipe.steps.first().map(|s| s.duration_secs()).unwrap_or(0);
        self.active = Some(Session {
            recipe_id: recipe.id.clone(),
            current_step_index: 0,
            is_running: true,
            step_remaining_secs: first_secs,
            overall_remaining_secs: recipe.total_duration_secs(),
            last_sample: Some(now),
        });
        Ok(SessionEvent::SessionStarted {
            recipe_id: recipe.id.clone(),
            step_index: 0,
            step_duration_secs: first_secs,
            at: now,
        })
    }

    /// Halt time accumulation. Silent no-op when nothing is running.
    pub fn pause(&mut self, now: DateTime<Utc>) -> Option<SessionEvent> {
        let sess = self.active.as_mut()?;
        if !sess.is_running {
            return None;
        }
        sess.is_running = false;
        sess.last_sample = None;
        Some(SessionEvent::SessionPaused {
            step_remaining_secs: sess.step_remaining_secs,
            at: now,
        })
    }

    /// Resume a paused session. Silent no-op when absent or already running.
    pub fn resume(&mut self, now: DateTime<Utc>) -> Option<SessionEvent> {
        let sess = self.active.as_mut()?;
        if sess.is_running {
            return None;
        }
        sess.is_running = true;
        sess.last_sample = Some(now);
        Some(SessionEvent::SessionResumed {
            step_remaining_secs: sess.step_remaining_secs,
            at: now,
        })
    }

    /// Drift-safe advance. Call periodically while a session runs.
    ///
    /// Elapsed whole seconds since the last sample are consumed against the
    /// step timeline; a late tick cascades across as many step boundaries as
    /// it covers, emitting one [`SessionEvent::StepAdvanced`] per boundary
    /// and [`SessionEvent::SessionCompleted`] when the last step runs out.
    /// No-op while paused or without a session.
    pub fn tick(&mut self, recipe: &Recipe, now: DateTime<Utc>) -> Vec<SessionEvent> {
        let Some(sess) = self.active.as_mut() else {
            return Vec::new();
        };
        if !sess.is_running {
            return Vec::new();
        }
        let last = sess.last_sample.unwrap_or(now);
        // Clamped at zero so a backwards clock jump cannot add time.
        let mut elapsed = (now - last).num_seconds().max(0) as u64;
        if elapsed == 0 {
            // Callbacks can fire more often than once a second.
            sess.last_sample = Some(now);
            return Vec::new();
        }

        let mut events = Vec::new();
        let mut completed = false;
        while elapsed > 0 && sess.current_step_index < recipe.steps.len() {
            if sess.step_remaining_secs > 0 {
                let consumed = elapsed.min(sess.step_remaining_secs);
                sess.step_remaining_secs -= consumed;
                sess.overall_remaining_secs =
                    sess.overall_remaining_secs.saturating_sub(consumed);
                elapsed -= consumed;
            }
            if sess.step_remaining_secs == 0 {
                let is_last = sess.current_step_index + 1 >= recipe.steps.len();
                if is_last {
                    completed = true;
                    break;
                }
                sess.current_step_index += 1;
                let next_secs = recipe.steps[sess.current_step_index].duration_secs();
                sess.step_remaining_secs = next_secs;
                // Exact suffix sum, so accumulated rounding can never drift it.
                sess.overall_remaining_secs =
                    recipe.remaining_secs_from(sess.current_step_index);
                events.push(SessionEvent::StepAdvanced {
                    step_index: sess.current_step_index,
                    step_duration_secs: next_secs,
                    at: now,
                });
            }
        }

        if completed {
            let recipe_id = sess.recipe_id.clone();
            self.active = None;
            events.push(SessionEvent::SessionCompleted { recipe_id, at: now });
        } else {
            sess.last_sample = Some(now);
        }
        events
    }

    /// End the current step immediately, as if its countdown had reached
    /// zero. Advancing to a non-final step always resumes the countdown,
    /// even from a paused session; stopping the final step terminates.
    pub fn stop_current_step(
        &mut self,
        recipe: &Recipe,
        now: DateTime<Utc>,
    ) -> Option<SessionEvent> {
        let is_last = {
            let sess = self.active.as_ref()?;
            sess.current_step_index + 1 >= recipe.steps.len()
        };
        if is_last {
            let sess = self.active.take()?;
            return Some(SessionEvent::SessionCompleted {
                recipe_id: sess.recipe_id,
                at: now,
            });
        }
        let sess = self.active.as_mut()?;
        let from = sess.current_step_index;
        sess.current_step_index += 1;
        sess.step_remaining_secs = recipe.steps[sess.current_step_index].duration_secs();
        sess.overall_remaining_secs = recipe.remaining_secs_from(sess.current_step_index);
        sess.is_running = true;
        sess.last_sample = Some(now);
        Some(SessionEvent::StepSkipped {
            from_step: from,
            to_step: sess.current_step_index,
            at: now,
        })
    }
}
