//! # MindTrack Core Library
//!
//! This library provides the data and aggregation layer of the MindTrack mood
//! journal: a user records a daily mood rating (1–5) with an optional note,
//! sees a rolling seven-day average and a per-day series, and the journal
//! clears itself once per week.
//!
//! ## Architecture
//!
//! - **Storage**: SQLite-backed entry store with snapshot subscriptions, and
//!   TOML-based configuration
//! - **Reset**: Persisted last-reset week and the controller that clears the
//!   journal on a new week or on demand
//! - **Stats**: Pure seven-day window aggregation over entry snapshots
//! - **Export**: CSV rendering of the entry list
//!
//! ## Key Components
//!
//! - [`MoodJournal`]: Commands and derived views for the presentation layer
//! - [`EntryStore`]: Durable, append-only entry collection
//! - [`ResetController`]: Weekly and manual reset
//! - [`MoodAggregator`]: Weekly average and daily series
//! - [`Config`]: Application configuration management

pub mod entry;
pub mod error;
pub mod export;
pub mod journal;
pub mod reset;
pub mod stats;
pub mod storage;

pub use entry::{Mood, MoodEntry};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use journal::{JournalViews, MoodJournal, ViewStream};
pub use reset::{week_key, ResetController, ResetOutcome, ResetSummary, ResetTracker};
pub use stats::{DayMood, MoodAggregator, MoodBand, MoodSummary};
pub use storage::{Config, Database, EntryStore};
