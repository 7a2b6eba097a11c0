//! Mood entry types.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Longest note accepted by [`validate_note`], in characters.
pub const MAX_NOTE_CHARS: usize = 1000;

/// A mood rating in `1..=5`.
///
/// The only way to build one from untrusted input is [`Mood::new`], so a
/// stored entry never carries an out-of-range rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Mood(u8);

impl Mood {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    /// Validate a raw rating.
    ///
    /// # Errors
    /// Returns [`ValidationError::MoodOutOfRange`] when `value` is not in `1..=5`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::MoodOutOfRange { value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Mood {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mood> for i64 {
    fn from(mood: Mood) -> Self {
        i64::from(mood.0)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check a free-text note before it reaches storage.
///
/// # Errors
/// Returns [`ValidationError::InvalidValue`] when the note exceeds
/// [`MAX_NOTE_CHARS`].
pub fn validate_note(note: &str) -> Result<(), ValidationError> {
    let len = note.chars().count();
    if len > MAX_NOTE_CHARS {
        return Err(ValidationError::InvalidValue {
            field: "note".to_string(),
            message: format!("{len} characters exceeds the limit of {MAX_NOTE_CHARS}"),
        });
    }
    Ok(())
}

/// One recorded mood rating.
///
/// Created once by the entry store, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    pub mood: Mood,
    pub note: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl MoodEntry {
    /// The entry's instant in UTC.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp)
            .single()
            .unwrap_or_default()
    }

    /// Calendar date of the entry in the given time zone.
    pub fn local_date<Tz: TimeZone>(&self, tz: &Tz) -> chrono::NaiveDate {
        self.recorded_at().with_timezone(tz).date_naive()
    }
}
