//! Rolling seven-day mood statistics.
//!
//! Both views bucket entries by their calendar date in the aggregator's time
//! zone. The window is the seven calendar days ending at and including
//! `today`; membership is decided by date equality, never by a 168-hour
//! duration, so two entries made on the same day always share a bucket.

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entry::MoodEntry;

/// Number of days in the rolling window.
pub const WINDOW_DAYS: usize = 7;

/// Average mood for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMood {
    pub date: NaiveDate,
    /// Short English weekday name, e.g. `Mon`.
    pub day_label: String,
    /// Mean of that day's ratings, `0.0` when nothing was recorded.
    pub avg_mood: f64,
}

/// Weekly average plus per-day series for one `today`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub today: NaiveDate,
    pub weekly_average: f64,
    pub daily_series: Vec<DayMood>,
}

/// Stateless mood aggregator.
///
/// Generic over the time zone used to turn entry instants into calendar
/// dates; [`MoodAggregator::local`] uses the system zone.
#[derive(Debug, Clone)]
pub struct MoodAggregator<Tz: TimeZone = Local> {
    tz: Tz,
}

impl MoodAggregator<Local> {
    pub fn local() -> Self {
        Self { tz: Local }
    }
}

impl Default for MoodAggregator<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl<Tz: TimeZone> MoodAggregator<Tz> {
    /// Create an aggregator that buckets by dates in `tz`.
    pub fn with_time_zone(tz: Tz) -> Self {
        Self { tz }
    }

    /// First day of the window ending at `today`.
    pub fn window_start(today: NaiveDate) -> NaiveDate {
        today - chrono::Duration::days(WINDOW_DAYS as i64 - 1)
    }

    fn in_window(date: NaiveDate, today: NaiveDate) -> bool {
        date >= Self::window_start(today) && date <= today
    }

    /// Mean rating over every entry in the window ending at `today`.
    ///
    /// Each entry counts once, so a day with three entries weighs three
    /// times as much as a day with one. Returns `0.0` for an empty window.
    pub fn weekly_average(&self, entries: &[MoodEntry], today: NaiveDate) -> f64 {
        let (sum, count) = entries
            .iter()
            .filter(|e| Self::in_window(e.local_date(&self.tz), today))
            .fold((0u64, 0u64), |(sum, count), e| {
                (sum + u64::from(e.mood.value()), count + 1)
            });
        mean(sum, count)
    }

    /// Seven per-day averages, oldest first, ending at `today`.
    ///
    /// Days without entries are present with `avg_mood == 0.0`.
    pub fn daily_series(&self, entries: &[MoodEntry], today: NaiveDate) -> Vec<DayMood> {
        let mut by_day: HashMap<NaiveDate, (u64, u64)> = HashMap::new();
        for entry in entries {
            let date = entry.local_date(&self.tz);
            if Self::in_window(date, today) {
                let slot = by_day.entry(date).or_insert((0, 0));
                slot.0 += u64::from(entry.mood.value());
                slot.1 += 1;
            }
        }

        let start = Self::window_start(today);
        start
            .iter_days()
            .take(WINDOW_DAYS)
            .map(|date| {
                let (sum, count) = by_day.get(&date).copied().unwrap_or((0, 0));
                DayMood {
                    date,
                    day_label: date.format("%a").to_string(),
                    avg_mood: mean(sum, count),
                }
            })
            .collect()
    }

    /// Both views at once.
    pub fn summarize(&self, entries: &[MoodEntry], today: NaiveDate) -> MoodSummary {
        MoodSummary {
            today,
            weekly_average: self.weekly_average(entries, today),
            daily_series: self.daily_series(entries, today),
        }
    }
}

fn mean(sum: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
