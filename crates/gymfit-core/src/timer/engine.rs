//! Timer engine implementation.
//!
//! The timer engine is a tick-counted state machine. It does not use
//! internal threads or a clock - the caller is responsible for calling
//! `tick()` once per second while a session is running.
//!
//! ## Session Phases
//!
//! ```text
//! Warmup -> Work -> (Rest -> Work)* -> Completed
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.start(exercise.params());
//! // Once per second:
//! engine.tick(); // Returns Some(Event) on phase transitions
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::duration::planned_total_secs;
use super::sequencer::{next_state, Phase};
use crate::catalog::ExerciseParameters;
use crate::events::Event;

/// State of one workout run, exclusively owned by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSession {
    session_id: Uuid,
    params: ExerciseParameters,
    phase: Phase,
    /// Seconds left in the current phase.
    remaining_secs: u64,
    /// 1-based set counter, never above `params.set_count`.
    current_set: u32,
    /// Whether the tick source should be consumed.
    running: bool,
}

impl TimerSession {
    fn new(params: ExerciseParameters, running: bool) -> Self {
        let remaining_secs = params.warmup_secs;
        Self {
            session_id: Uuid::new_v4(),
            params,
            phase: Phase::Warmup,
            remaining_secs,
            current_set: 1,
            running,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn exercise_id(&self) -> &str {
        &self.params.id
    }

    pub fn params(&self) -> &ExerciseParameters {
        &self.params
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Immutable view of the active session for presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub session_id: Uuid,
    pub exercise_id: String,
    pub phase: Phase,
    pub remaining_secs: u64,
    pub current_set: u32,
    pub set_count: u32,
    pub running: bool,
    pub planned_total_secs: u64,
}

/// Core timer engine.
///
/// Commands issued in an incompatible state (pausing with no session,
/// resuming a completed one) are silent no-ops rather than errors: timer
/// controls are expected to race harmlessly with completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerEngine {
    session: Option<TimerSession>,
}

impl TimerEngine {
    /// Create an engine with no active session.
    pub fn new() -> Self {
        Self { session: None }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session(&self) -> Option<&TimerSession> {
        self.session.as_ref()
    }

    /// Build a state snapshot, or `None` when no session exists.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.session.as_ref().map(|s| Snapshot {
            session_id: s.session_id,
            exercise_id: s.params.id.clone(),
            phase: s.phase,
            remaining_secs: s.remaining_secs,
            current_set: s.current_set,
            set_count: s.params.set_count,
            running: s.running,
            planned_total_secs: planned_total_secs(&s.params),
        })
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a session.
    ///
    /// Creates a fresh session when none exists or the previous one has
    /// completed. An existing paused session is resumed instead; an already
    /// running one is left untouched.
    pub fn start(&mut self, params: ExerciseParameters) -> Option<Event> {
        match &mut self.session {
            Some(s) if s.phase != Phase::Completed => {
                if s.running {
                    return None; // Already running.
                }
                s.running = true;
                Some(Event::TimerResumed {
                    remaining_secs: s.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => {
                let session = TimerSession::new(params, true);
                let event = Event::SessionStarted {
                    session_id: session.session_id,
                    exercise_id: session.params.id.clone(),
                    phase: session.phase,
                    duration_secs: session.remaining_secs,
                    at: Utc::now(),
                };
                self.session = Some(session);
                Some(event)
            }
        }
    }

    /// Stop consuming ticks, retaining all state for resumption.
    pub fn pause(&mut self) -> Option<Event> {
        let s = self.session.as_mut()?;
        if !s.running || s.phase == Phase::Completed {
            return None;
        }
        s.running = false;
        Some(Event::TimerPaused {
            remaining_secs: s.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Inverse of [`pause`](Self::pause). No-op without a pausable session.
    pub fn resume(&mut self) -> Option<Event> {
        let s = self.session.as_mut()?;
        if s.running || s.phase == Phase::Completed {
            return None;
        }
        s.running = true;
        Some(Event::TimerResumed {
            remaining_secs: s.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Discard any current session and re-initialize at warm-up, paused.
    ///
    /// The caller must explicitly resume to begin ticking again.
    pub fn reset(&mut self, params: ExerciseParameters) -> Option<Event> {
        let session = TimerSession::new(params, false);
        let event = Event::TimerReset {
            exercise_id: session.params.id.clone(),
            at: Utc::now(),
        };
        self.session = Some(session);
        Some(event)
    }

    /// Apply one second of progress.
    ///
    /// A no-op unless the session is running and not completed. Returns
    /// `Some(Event)` on every phase transition; the completion event carries
    /// the planned session total for the history sink.
    pub fn tick(&mut self) -> Option<Event> {
        let s = self.session.as_mut()?;
        if !s.running || s.phase == Phase::Completed {
            return None;
        }

        s.remaining_secs = s.remaining_secs.saturating_sub(1);
        if s.remaining_secs > 0 {
            return None;
        }

        let next = next_state(s.phase, s.current_set, &s.params);
        s.phase = next.phase;
        s.remaining_secs = next.remaining_secs;
        s.current_set = next.current_set;

        if s.phase == Phase::Completed {
            s.running = false;
            return Some(Event::SessionCompleted {
                session_id: s.session_id,
                exercise_id: s.params.id.clone(),
                total_secs: planned_total_secs(&s.params),
                at: Utc::now(),
            });
        }

        Some(Event::PhaseAdvanced {
            phase: s.phase,
            current_set: s.current_set,
            duration_secs: s.remaining_secs,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ExerciseParameters {
        ExerciseParameters {
            id: "push-ups".into(),
            set_count: 3,
            warmup_secs: 5,
            work_secs: 10,
            rest_secs: 3,
        }
    }

    fn ticks(engine: &mut TimerEngine, n: u64) -> Vec<Event> {
        (0..n).filter_map(|_| engine.tick()).collect()
    }

    #[test]
    fn start_pause_resume() {
        let mut engine = TimerEngine::new();
        assert!(engine.snapshot().is_none());

        assert!(matches!(
            engine.start(params()),
            Some(Event::SessionStarted { .. })
        ));
        let snap = engine.snapshot().unwrap();
        assert_eq!(snap.phase, Phase::Warmup);
        assert_eq!(snap.remaining_secs, 5);
        assert_eq!(snap.current_set, 1);
        assert!(snap.running);

        assert!(matches!(engine.pause(), Some(Event::TimerPaused { .. })));
        assert!(!engine.snapshot().unwrap().running);

        assert!(matches!(engine.resume(), Some(Event::TimerResumed { .. })));
        assert!(engine.snapshot().unwrap().running);
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut engine = TimerEngine::new();
        engine.start(params());
        engine.tick();
        let before = engine.snapshot().unwrap();
        assert!(engine.start(params()).is_none());
        let after = engine.snapshot().unwrap();
        assert_eq!(before.session_id, after.session_id);
        assert_eq!(before.remaining_secs, after.remaining_secs);
    }

    #[test]
    fn mutators_without_session_are_noops() {
        let mut engine = TimerEngine::new();
        assert!(engine.pause().is_none());
        assert!(engine.resume().is_none());
        assert!(engine.tick().is_none());
        assert!(engine.snapshot().is_none());
    }

    #[test]
    fn tick_decrements_by_one() {
        let mut engine = TimerEngine::new();
        engine.start(params());
        assert!(engine.tick().is_none());
        assert_eq!(engine.snapshot().unwrap().remaining_secs, 4);
    }

    #[test]
    fn paused_session_ignores_ticks() {
        let mut engine = TimerEngine::new();
        engine.start(params());
        engine.pause();
        for _ in 0..10 {
            assert!(engine.tick().is_none());
        }
        assert_eq!(engine.snapshot().unwrap().remaining_secs, 5);
    }

    #[test]
    fn warmup_expiry_advances_to_work() {
        let mut engine = TimerEngine::new();
        engine.start(params());
        let events = ticks(&mut engine, 5);
        assert!(matches!(
            events.as_slice(),
            [Event::PhaseAdvanced {
                phase: Phase::Work,
                current_set: 1,
                duration_secs: 10,
                ..
            }]
        ));
    }

    #[test]
    fn completion_stops_running_and_reports_planned_total() {
        let mut engine = TimerEngine::new();
        engine.start(params());
        // 5 warmup + (10 work + 3 rest) * 2 + 10 final work
        let events = ticks(&mut engine, 41);
        match events.last() {
            Some(Event::SessionCompleted { total_secs, .. }) => assert_eq!(*total_secs, 41),
            other => panic!("expected SessionCompleted, got {other:?}"),
        }
        let snap = engine.snapshot().unwrap();
        assert_eq!(snap.phase, Phase::Completed);
        assert!(!snap.running);
    }

    #[test]
    fn completed_session_is_terminal() {
        let mut engine = TimerEngine::new();
        engine.start(params());
        ticks(&mut engine, 41);
        assert!(engine.resume().is_none());
        assert!(engine.pause().is_none());
        for _ in 0..5 {
            assert!(engine.tick().is_none());
        }
        let snap = engine.snapshot().unwrap();
        assert_eq!(snap.phase, Phase::Completed);
        assert_eq!(snap.remaining_secs, 0);
    }

    #[test]
    fn start_after_completion_begins_fresh_session() {
        let mut engine = TimerEngine::new();
        engine.start(params());
        ticks(&mut engine, 41);
        let old_id = engine.snapshot().unwrap().session_id;

        assert!(matches!(
            engine.start(params()),
            Some(Event::SessionStarted { .. })
        ));
        let snap = engine.snapshot().unwrap();
        assert_ne!(snap.session_id, old_id);
        assert_eq!(snap.phase, Phase::Warmup);
        assert_eq!(snap.current_set, 1);
    }

    #[test]
    fn reset_returns_to_warmup_paused() {
        let mut engine = TimerEngine::new();
        engine.start(params());
        ticks(&mut engine, 20);
        engine.reset(params());
        let snap = engine.snapshot().unwrap();
        assert_eq!(snap.phase, Phase::Warmup);
        assert_eq!(snap.remaining_secs, 5);
        assert_eq!(snap.current_set, 1);
        assert!(!snap.running);
    }

    #[test]
    fn engine_round_trips_through_json() {
        let mut engine = TimerEngine::new();
        engine.start(params());
        ticks(&mut engine, 7);
        let json = serde_json::to_string(&engine).unwrap();
        let restored: TimerEngine = serde_json::from_str(&json).unwrap();
        let a = engine.snapshot().unwrap();
        let b = restored.snapshot().unwrap();
        assert_eq!(a.session_id, b.session_id);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.remaining_secs, b.remaining_secs);
    }
}
