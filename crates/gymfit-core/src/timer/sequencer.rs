//! Pure phase-transition logic.
//!
//! A workout session moves through a fixed cycle:
//!
//! ```text
//! Warmup -> Work -> (Rest -> Work)* -> Completed
//! ```
//!
//! [`next_state`] is only consulted when the current phase has counted down
//! to zero; it never performs I/O and never mutates anything, which keeps
//! the whole transition table unit-testable without an engine instance.

use serde::{Deserialize, Serialize};

use crate::catalog::ExerciseParameters;

/// One of the four mutually exclusive stages of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Warmup,
    Work,
    Rest,
    Completed,
}

/// Result of a phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextState {
    pub phase: Phase,
    pub remaining_secs: u64,
    pub current_set: u32,
}

/// Compute the state that follows an expired phase.
///
/// The final work set transitions straight to `Completed`; with a single
/// set, `Rest` is never produced at all. A zero-second rest is still
/// entered (and expires on its next tick) rather than being skipped, so
/// every phase of the cycle is observable by a polling presentation layer.
/// `Completed` is absorbing.
pub fn next_state(phase: Phase, current_set: u32, params: &ExerciseParameters) -> NextState {
    match phase {
        Phase::Warmup => NextState {
            phase: Phase::Work,
            remaining_secs: params.work_secs,
            current_set,
        },
        Phase::Work if current_set < params.set_count => NextState {
            phase: Phase::Rest,
            remaining_secs: params.rest_secs,
            current_set,
        },
        Phase::Work => NextState {
            phase: Phase::Completed,
            remaining_secs: 0,
            current_set,
        },
        Phase::Rest => NextState {
            phase: Phase::Work,
            remaining_secs: params.work_secs,
            current_set: current_set + 1,
        },
        Phase::Completed => NextState {
            phase: Phase::Completed,
            remaining_secs: 0,
            current_set,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(set_count: u32) -> ExerciseParameters {
        ExerciseParameters {
            id: "test".into(),
            set_count,
            warmup_secs: 5,
            work_secs: 10,
            rest_secs: 3,
        }
    }

    #[test]
    fn warmup_leads_to_work() {
        let next = next_state(Phase::Warmup, 1, &params(3));
        assert_eq!(next.phase, Phase::Work);
        assert_eq!(next.remaining_secs, 10);
        assert_eq!(next.current_set, 1);
    }

    #[test]
    fn work_leads_to_rest_before_final_set() {
        let next = next_state(Phase::Work, 1, &params(3));
        assert_eq!(next.phase, Phase::Rest);
        assert_eq!(next.remaining_secs, 3);
        assert_eq!(next.current_set, 1);
    }

    #[test]
    fn final_work_set_completes() {
        let next = next_state(Phase::Work, 3, &params(3));
        assert_eq!(next.phase, Phase::Completed);
        assert_eq!(next.remaining_secs, 0);
    }

    #[test]
    fn single_set_never_rests() {
        let next = next_state(Phase::Work, 1, &params(1));
        assert_eq!(next.phase, Phase::Completed);
    }

    #[test]
    fn rest_increments_set() {
        let next = next_state(Phase::Rest, 1, &params(3));
        assert_eq!(next.phase, Phase::Work);
        assert_eq!(next.remaining_secs, 10);
        assert_eq!(next.current_set, 2);
    }

    #[test]
    fn zero_rest_is_entered_not_skipped() {
        let mut p = params(3);
        p.rest_secs = 0;
        let next = next_state(Phase::Work, 1, &p);
        assert_eq!(next.phase, Phase::Rest);
        assert_eq!(next.remaining_secs, 0);
    }

    #[test]
    fn completed_is_absorbing() {
        let next = next_state(Phase::Completed, 2, &params(3));
        assert_eq!(next.phase, Phase::Completed);
        assert_eq!(next.remaining_secs, 0);
        assert_eq!(next.current_set, 2);
    }
}
