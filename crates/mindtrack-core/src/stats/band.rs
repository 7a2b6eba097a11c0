use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of an average mood, used for colouring charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodBand {
    /// No entries (average of 0.0)
    NoData,
    /// Up to 2.0
    Low,
    /// Above 2.0 and below 4.0
    Medium,
    /// 4.0 and above
    High,
}

impl MoodBand {
    pub fn from_average(avg: f64) -> Self {
        if avg <= 0.0 {
            MoodBand::NoData
        } else if avg <= 2.0 {
            MoodBand::Low
        } else if avg < 4.0 {
            MoodBand::Medium
        } else {
            MoodBand::High
        }
    }
}

impl fmt::Display for MoodBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoodBand::NoData => "no data",
            MoodBand::Low => "low",
            MoodBand::Medium => "medium",
            MoodBand::High => "high",
        };
        f.write_str(s)
    }
}
