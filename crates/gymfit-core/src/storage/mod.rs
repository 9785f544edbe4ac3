mod config;
pub mod database;

pub use config::{Config, TimerConfig};
pub use database::{Database, Stats, WorkoutRecord};

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns the data directory, creating it on demand.
///
/// `GYMFIT_DATA_DIR` overrides the location entirely (used by tests).
/// Otherwise resolves to `~/.config/gymfit`, or `~/.config/gymfit-dev`
/// when `GYMFIT_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let dir = if let Ok(dir) = std::env::var("GYMFIT_DATA_DIR") {
        PathBuf::from(dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("GYMFIT_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("gymfit-dev")
        } else {
            base_dir.join("gymfit")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
