use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tracker::ResetTracker;
use crate::error::DatabaseError;
use crate::storage::EntryStore;

/// A completed reset: the recorded week and how many entries were deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetSummary {
    pub week: i32,
    pub deleted: usize,
}

/// What a conditional reset request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResetOutcome {
    /// The week was already reset; nothing changed.
    Skipped { week: i32 },
    /// Entries were deleted and the week recorded.
    Reset { week: i32, deleted: usize },
}

/// Clears the journal and records the week it happened in.
///
/// Entries are always deleted before the week is recorded. If the process
/// dies between the two steps the week is still unrecorded, and the next
/// automatic check repeats the (idempotent) delete.
#[derive(Clone)]
pub struct ResetController {
    store: EntryStore,
    tracker: ResetTracker,
}

impl ResetController {
    pub fn new(store: EntryStore, tracker: ResetTracker) -> Self {
        Self { store, tracker }
    }

    pub fn tracker(&self) -> &ResetTracker {
        &self.tracker
    }

    /// Reset only if no reset has been recorded for the week containing `today`.
    ///
    /// # Errors
    /// Returns an error if reading the tracker, deleting entries, or
    /// recording the week fails.
    pub async fn reset_if_new_week(&self, today: NaiveDate) -> Result<ResetOutcome, DatabaseError> {
        if !self.tracker.should_reset(today).await? {
            let week = super::week_key(today);
            tracing::debug!(week, "weekly reset already done");
            return Ok(ResetOutcome::Skipped { week });
        }
        let ResetSummary { week, deleted } = self.reset_now(today).await?;
        Ok(ResetOutcome::Reset { week, deleted })
    }

    /// Unconditionally delete every entry, then record the week.
    ///
    /// # Errors
    /// Returns an error if deleting entries or recording the week fails.
    pub async fn reset_now(&self, today: NaiveDate) -> Result<ResetSummary, DatabaseError> {
        let deleted = self.store.delete_all().await?;
        let week = self.tracker.mark_reset(today).await?;
        tracing::info!(week, deleted, "journal reset");
        Ok(ResetSummary { week, deleted })
    }
}
