//! SQLite-based workout history and engine persistence.
//!
//! Provides persistent storage for:
//! - Completed workout sessions
//! - Workout statistics (daily and all-time)
//! - Key-value store for timer engine state between CLI invocations

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::data_dir;
use crate::error::{CoreError, DatabaseError};
use crate::history::HistorySink;

/// One completed workout session, newest first in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: i64,
    pub session_id: String,
    pub exercise_id: String,
    pub duration_secs: u64,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Stats {
    pub total_workouts: u64,
    pub total_secs: u64,
    pub today_workouts: u64,
    pub today_secs: u64,
}

/// SQLite database for workout history.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data-dir>/gymfit.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        Self::open_at(data_dir()?.join("gymfit.db"))
    }

    /// Open the database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS workouts (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id    TEXT NOT NULL,
                exercise_id   TEXT NOT NULL,
                duration_secs INTEGER NOT NULL,
                completed_at  TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_workouts_completed_at ON workouts(completed_at);
            CREATE INDEX IF NOT EXISTS idx_workouts_exercise_id ON workouts(exercise_id);",
        )?;
        Ok(())
    }

    /// Record a completed workout.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_workout(
        &self,
        exercise_id: &str,
        session_id: Uuid,
        duration_secs: u64,
        completed_at: DateTime<Utc>,
    ) -> Result<i64, rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO workouts (session_id, exercise_id, duration_secs, completed_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                session_id.to_string(),
                exercise_id,
                duration_secs,
                completed_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Most recent workouts, newest first.
    pub fn history(&self, limit: usize) -> Result<Vec<WorkoutRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, session_id, exercise_id, duration_secs, completed_at
             FROM workouts
             ORDER BY completed_at DESC, id DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            let completed_at: String = row.get(4)?;
            let completed_at = DateTime::parse_from_rfc3339(&completed_at)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        4,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
            Ok(WorkoutRecord {
                id: row.get(0)?,
                session_id: row.get(1)?,
                exercise_id: row.get(2)?,
                duration_secs: row.get(3)?,
                completed_at,
            })
        })?;
        rows.collect()
    }

    pub fn stats_today(&self) -> Result<Stats, rusqlite::Error> {
        let (count, secs) = self.totals_since(Some(&today_floor()))?;
        Ok(Stats {
            total_workouts: count,
            total_secs: secs,
            today_workouts: count,
            today_secs: secs,
        })
    }

    pub fn stats_all(&self) -> Result<Stats, rusqlite::Error> {
        let (total_workouts, total_secs) = self.totals_since(None)?;
        let (today_workouts, today_secs) = self.totals_since(Some(&today_floor()))?;
        Ok(Stats {
            total_workouts,
            total_secs,
            today_workouts,
            today_secs,
        })
    }

    fn totals_since(&self, floor: Option<&str>) -> Result<(u64, u64), rusqlite::Error> {
        match floor {
            Some(floor) => self.conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(duration_secs), 0)
                 FROM workouts WHERE completed_at >= ?1",
                params![floor],
                |row| Ok((row.get(0)?, row.get(1)?)),
            ),
            None => self.conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(duration_secs), 0) FROM workouts",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            ),
        }
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl HistorySink for Database {
    fn record(
        &mut self,
        exercise_id: &str,
        session_id: Uuid,
        total_secs: u64,
        completed_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        self.record_workout(exercise_id, session_id, total_secs, completed_at)
            .map_err(DatabaseError::from)?;
        Ok(())
    }
}

fn today_floor() -> String {
    format!("{}T00:00:00+00:00", Utc::now().format("%Y-%m-%d"))
}
