//! Persistent "last reset week" bookkeeping.
//!
//! Weeks follow ISO-8601: they start on Monday and the year component is the
//! ISO week-based year, so the days around January 1 that fall in one ISO
//! week map to the same key.

use chrono::{Datelike, NaiveDate};

use crate::error::DatabaseError;
use crate::storage::Database;

/// kv key holding the last reset week.
pub const LAST_RESET_WEEK_KEY: &str = "last_reset_week";

/// `year * 100 + week` for the ISO week containing `date`.
pub fn week_key(date: NaiveDate) -> i32 {
    let week = date.iso_week();
    week.year() * 100 + week.week() as i32
}

/// Reads and writes the single `last_reset_week` value.
#[derive(Debug, Clone)]
pub struct ResetTracker {
    db: Database,
}

impl ResetTracker {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// The stored week key, or `None` if no reset was ever recorded.
    ///
    /// A value that does not parse as an integer is treated as absent.
    ///
    /// # Errors
    /// Returns an error only if the database cannot be read.
    pub async fn last_reset_week(&self) -> Result<Option<i32>, DatabaseError> {
        let raw = self.db.kv_get(LAST_RESET_WEEK_KEY).await?;
        Ok(raw.and_then(|value| match value.trim().parse::<i32>() {
            Ok(week) => Some(week),
            Err(e) => {
                tracing::warn!(%value, error = %e, "ignoring malformed {LAST_RESET_WEEK_KEY}");
                None
            }
        }))
    }

    /// Whether the stored week differs from the week containing `today`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be read.
    pub async fn should_reset(&self, today: NaiveDate) -> Result<bool, DatabaseError> {
        let last = self.last_reset_week().await?;
        Ok(last != Some(week_key(today)))
    }

    /// Record that a reset happened in the week containing `today`.
    /// Returns the stored key.
    ///
    /// # Errors
    /// Returns an error if the database cannot be written.
    pub async fn mark_reset(&self, today: NaiveDate) -> Result<i32, DatabaseError> {
        let key = week_key(today);
        self.db
            .kv_set(LAST_RESET_WEEK_KEY, &key.to_string())
            .await?;
        tracing::info!(week = key, "recorded weekly reset");
        Ok(key)
    }
}
