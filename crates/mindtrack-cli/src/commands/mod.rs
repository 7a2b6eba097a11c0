pub mod add;
pub mod config;
pub mod export;
pub mod list;
pub mod reset;
pub mod summary;

use chrono::{Local, TimeZone};
use mindtrack_core::{Config, MoodEntry, MoodJournal};
use std::path::PathBuf;

/// Everything a command needs, built once per invocation.
pub struct Context {
    pub data_dir: PathBuf,
    pub config: Config,
    pub journal: MoodJournal,
}

impl Context {
    pub async fn open(
        data_dir: PathBuf,
        config: Config,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let journal = MoodJournal::open(&data_dir, &config).await?;
        Ok(Self {
            data_dir,
            config,
            journal,
        })
    }
}

/// `Mon, Jan 5 • 3:04 PM` in local time.
pub fn format_timestamp(entry: &MoodEntry) -> String {
    Local
        .timestamp_millis_opt(entry.timestamp)
        .single()
        .map(|dt| dt.format("%a, %b %-d • %-I:%M %p").to_string())
        .unwrap_or_else(|| entry.timestamp.to_string())
}
