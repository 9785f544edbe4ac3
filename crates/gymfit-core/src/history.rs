//! History sink seam.
//!
//! The engine itself never touches storage: the tick driver forwards each
//! `SessionCompleted` event to a [`HistorySink`] exactly once. The SQLite
//! [`Database`](crate::storage::Database) is the production sink; tests
//! substitute an in-memory one.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::CoreError;

/// Receives one record per completed workout session.
pub trait HistorySink {
    /// Record a completed session.
    ///
    /// `total_secs` is the planned session duration.
    ///
    /// # Errors
    /// Returns an error if the record cannot be persisted.
    fn record(
        &mut self,
        exercise_id: &str,
        session_id: Uuid,
        total_secs: u64,
        completed_at: DateTime<Utc>,
    ) -> Result<(), CoreError>;
}
