//! Command and view surface consumed by the presentation layer.
//!
//! [`MoodJournal`] owns one instance of each component, wired over a single
//! [`Database`] opened by the caller at startup. Commands validate their
//! input before touching storage; views are recomputed from immutable entry
//! snapshots.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::watch;

use crate::entry::{validate_note, Mood, MoodEntry};
use crate::error::Result;
use crate::reset::{ResetController, ResetOutcome, ResetSummary, ResetTracker};
use crate::stats::{DayMood, MoodAggregator};
use crate::storage::{Config, Database, EntrySnapshot, EntryStore};

/// Read-only derived values for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalViews {
    /// All entries, newest first.
    pub entries: Vec<MoodEntry>,
    pub weekly_average: f64,
    pub daily_series: Vec<DayMood>,
}

impl JournalViews {
    fn compute(aggregator: &MoodAggregator, entries: &[MoodEntry], today: NaiveDate) -> Self {
        let summary = aggregator.summarize(entries, today);
        Self {
            entries: entries.to_vec(),
            weekly_average: summary.weekly_average,
            daily_series: summary.daily_series,
        }
    }
}

/// Mood journal facade.
#[derive(Clone)]
pub struct MoodJournal {
    store: EntryStore,
    resets: ResetController,
    aggregator: MoodAggregator,
    auto_reset: bool,
}

impl MoodJournal {
    /// Wire the journal over an already-open database.
    ///
    /// # Errors
    /// Returns an error if the initial entry snapshot cannot be read.
    pub async fn new(db: Database, config: &Config) -> Result<Self> {
        let store = EntryStore::new(db.clone()).await?;
        let resets = ResetController::new(store.clone(), ResetTracker::new(db));
        Ok(Self {
            store,
            resets,
            aggregator: MoodAggregator::local(),
            auto_reset: config.reset.auto_reset,
        })
    }

    /// Open the configured database inside `data_dir` and wire the journal.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or read.
    pub async fn open(data_dir: &Path, config: &Config) -> Result<Self> {
        let db = Database::open_at(config.database_path(data_dir))?;
        Self::new(db, config).await
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Validate and record a mood rating.
    ///
    /// # Errors
    /// Returns a validation error for a rating outside 1–5 or an overlong
    /// note, or a database error if the insert fails.
    pub async fn add_mood(&self, mood: i64, note: &str) -> Result<MoodEntry> {
        let mood = Mood::new(mood)?;
        validate_note(note)?;
        Ok(self.store.insert(mood, note).await?)
    }

    /// Clear the journal now and mark this week as reset.
    ///
    /// # Errors
    /// Returns an error if the delete or the week update fails.
    pub async fn reset_week_manual(&self) -> Result<ResetSummary> {
        Ok(self.resets.reset_now(today()).await?)
    }

    /// Clear the journal if this week has not been reset yet.
    ///
    /// Does nothing when automatic reset is disabled in the configuration.
    ///
    /// # Errors
    /// Returns an error if any storage step fails.
    pub async fn auto_reset_if_new_week(&self) -> Result<Option<ResetOutcome>> {
        if !self.auto_reset {
            return Ok(None);
        }
        Ok(Some(self.resets.reset_if_new_week(today()).await?))
    }

    /// All entries, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn mood_list(&self) -> Result<Vec<MoodEntry>> {
        Ok(self.store.list_all().await?)
    }

    /// Views computed from the latest snapshot for today's local date.
    pub fn views(&self) -> JournalViews {
        JournalViews::compute(&self.aggregator, &self.store.snapshot(), today())
    }

    /// Stream of views recomputed after every store mutation.
    pub fn watch_views(&self) -> ViewStream {
        ViewStream {
            rx: self.store.subscribe(),
            aggregator: self.aggregator.clone(),
        }
    }
}

/// Recomputes [`JournalViews`] whenever the entry store changes.
pub struct ViewStream {
    rx: watch::Receiver<EntrySnapshot>,
    aggregator: MoodAggregator,
}

impl ViewStream {
    /// Views for the snapshot currently held, without waiting.
    pub fn current(&mut self) -> JournalViews {
        let snapshot = self.rx.borrow_and_update().clone();
        JournalViews::compute(&self.aggregator, &snapshot, today())
    }

    /// Wait for the next mutation and return the recomputed views.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn next(&mut self) -> Option<JournalViews> {
        self.rx.changed().await.ok()?;
        Some(self.current())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
