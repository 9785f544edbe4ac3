mod duration;
mod engine;
mod sequencer;

pub use duration::planned_total_secs;
pub use engine::{Snapshot, TimerEngine, TimerSession};
pub use sequencer::{next_state, NextState, Phase};
