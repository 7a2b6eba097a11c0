//! Property and scenario tests for the seven-day aggregation.

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use mindtrack_core::stats::WINDOW_DAYS;
use mindtrack_core::{Mood, MoodAggregator, MoodEntry};
use proptest::prelude::*;

fn tz() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

fn entry(days_ago: i64, minute_of_day: u32, mood: i64) -> MoodEntry {
    let date = today() - chrono::Duration::days(days_ago);
    let time = NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0).unwrap();
    let instant = tz()
        .from_local_datetime(&date.and_time(time))
        .single()
        .unwrap();
    MoodEntry {
        id: 0,
        mood: Mood::new(mood).unwrap(),
        note: String::new(),
        timestamp: instant.timestamp_millis(),
    }
}

#[test]
fn today_and_three_days_ago_zero_fill_the_rest() {
    let entries = vec![entry(0, 600, 4), entry(3, 600, 2)];
    let series = MoodAggregator::with_time_zone(tz()).daily_series(&entries, today());

    assert_eq!(series.len(), 7);
    assert_eq!(series[6].avg_mood, 4.0);
    assert_eq!(series[3].avg_mood, 2.0);
    for (i, slot) in series.iter().enumerate() {
        if i != 3 && i != 6 {
            assert_eq!(slot.avg_mood, 0.0, "slot {i} should be empty");
        }
    }
}

#[test]
fn window_crosses_month_boundary() {
    let series = MoodAggregator::with_time_zone(tz()).daily_series(&[], today());
    let first = series.first().unwrap().date;
    assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 23).unwrap());
    assert_eq!(series.last().unwrap().day_label, "Thu");
}

proptest! {
    #[test]
    fn series_always_has_seven_bounded_slots(
        raw in prop::collection::vec((0i64..14, 0u32..1440, 1i64..=5), 0..40)
    ) {
        let entries: Vec<_> = raw.iter().map(|&(d, m, mood)| entry(d, m, mood)).collect();
        let agg = MoodAggregator::with_time_zone(tz());
        let series = agg.daily_series(&entries, today());

        prop_assert_eq!(series.len(), WINDOW_DAYS);
        prop_assert_eq!(series[WINDOW_DAYS - 1].date, today());
        for slot in &series {
            prop_assert!(slot.avg_mood == 0.0 || (1.0..=5.0).contains(&slot.avg_mood));
        }
    }

    #[test]
    fn average_matches_in_window_mean(
        raw in prop::collection::vec((0i64..14, 0u32..1440, 1i64..=5), 0..40)
    ) {
        let entries: Vec<_> = raw.iter().map(|&(d, m, mood)| entry(d, m, mood)).collect();
        let agg = MoodAggregator::with_time_zone(tz());
        let avg = agg.weekly_average(&entries, today());

        let recent: Vec<i64> = raw
            .iter()
            .filter(|&&(d, _, _)| d < WINDOW_DAYS as i64)
            .map(|&(_, _, mood)| mood)
            .collect();
        if recent.is_empty() {
            prop_assert_eq!(avg, 0.0);
        } else {
            let expected = recent.iter().sum::<i64>() as f64 / recent.len() as f64;
            prop_assert!((avg - expected).abs() < 1e-9);
            prop_assert!((1.0..=5.0).contains(&avg));
        }
    }
}
