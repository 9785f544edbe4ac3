use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::Phase;

/// Every state change in the engine produces an Event.
/// The CLI prints them; the history sink consumes `SessionCompleted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        session_id: Uuid,
        exercise_id: String,
        phase: Phase,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        exercise_id: String,
        at: DateTime<Utc>,
    },
    /// A phase counted down to zero and the session moved to the next one.
    PhaseAdvanced {
        phase: Phase,
        current_set: u32,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The final work set finished. `total_secs` is the planned session
    /// duration, recorded exactly once per session.
    SessionCompleted {
        session_id: Uuid,
        exercise_id: String,
        total_secs: u64,
        at: DateTime<Utc>,
    },
}
