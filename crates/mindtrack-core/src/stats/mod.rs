//! Statistics module for MindTrack
//!
//! Pure computations over entry snapshots: the rolling seven-day average,
//! the zero-filled daily series, and mood banding for presentation.

mod band;
mod window;

pub use band::MoodBand;
pub use window::{DayMood, MoodAggregator, MoodSummary, WINDOW_DAYS};
