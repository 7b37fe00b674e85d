use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every session state change produces an event.
/// The presentation layer renders these; the engine never consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    SessionStarted {
        recipe_id: String,
        step_index: usize,
        step_duration_secs: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        step_remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionResumed {
        step_remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A step countdown reached zero and the session moved to the next step.
    /// A single late tick can emit several of these.
    StepAdvanced {
        step_index: usize,
        step_duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The current step was ended early by an explicit stop.
    StepSkipped {
        from_step: usize,
        to_step: usize,
        at: DateTime<Utc>,
    },
    /// The last step finished (or was stopped); no session remains.
    SessionCompleted {
        recipe_id: String,
        at: DateTime<Utc>,
    },
}
