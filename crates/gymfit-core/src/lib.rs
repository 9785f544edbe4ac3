//! # GymFit Core Library
//!
//! This library provides the core business logic for the GymFit workout
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary; any GUI would be a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: A tick-counted state machine that requires the caller
//!   to invoke `tick()` once per second while a session runs
//! - **Phase Sequencer**: Pure transition function over the fixed
//!   warm-up / work / rest cycle
//! - **Catalog**: Static read-only exercise library
//! - **Storage**: SQLite-based workout history and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`Catalog`]: Exercise descriptor source
//! - [`Database`]: Workout history persistence, the production [`HistorySink`]
//! - [`Config`]: User profile and timer settings

pub mod catalog;
pub mod error;
pub mod events;
pub mod history;
pub mod profile;
pub mod storage;
pub mod timer;

pub use catalog::{Catalog, Category, Exercise, ExerciseParameters};
pub use error::{CatalogError, ConfigError, CoreError, DatabaseError};
pub use events::Event;
pub use history::HistorySink;
pub use profile::{BmiCategory, FitnessLevel, UserProfile};
pub use storage::{Config, Database, Stats, TimerConfig, WorkoutRecord};
pub use timer::{next_state, planned_total_secs, NextState, Phase, Snapshot, TimerEngine};
