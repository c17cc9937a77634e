//! Diary record domain model.
//!
//! # Responsibility
//! - Define the canonical `Record` persisted by the store and shown in views.
//! - Parse the three raw form inputs into validated gauge values.
//! - Derive display dates from the creation timestamp.
//!
//! # Invariants
//! - `id` is the creation instant in epoch milliseconds and never changes.
//! - `date` is formatted once at creation and never recomputed on update.
//! - All three gauges are non-negative by construction.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one diary record.
///
/// The value is the creation timestamp in epoch milliseconds, so ordering by
/// id is ordering by creation time.
pub type RecordId = i64;

/// The three numeric gauges captured by one diary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    ExerciseMinutes,
    Calories,
    WaterCups,
}

impl EntryField {
    /// Stable field name used in errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::ExerciseMinutes => "exercise_minutes",
            Self::Calories => "calories",
            Self::WaterCups => "water_cups",
        }
    }
}

impl Display for EntryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation error for raw entry input.
///
/// Both variants leave the collection untouched; validation is all-or-nothing
/// across the three fields and reports the first offending one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Input did not parse as a whole number in gauge range.
    NotANumber { field: EntryField, value: String },
    /// Input parsed, but to a negative value.
    Negative { field: EntryField, value: i64 },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber { field, value } => {
                write!(f, "{field} is not a valid whole number: `{value}`")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} cannot be negative: {value}")
            }
        }
    }
}

impl Error for EntryValidationError {}

/// Validated gauge values for one save operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInput {
    pub exercise_minutes: u32,
    pub calories: u32,
    pub water_cups: u32,
}

impl EntryInput {
    /// Parses the three raw form inputs all-or-nothing.
    ///
    /// # Contract
    /// - Surrounding whitespace is tolerated.
    /// - Fields are checked in exercise -> calories -> water order and the
    ///   first offending field is reported.
    /// - On any failure no value is usable; callers must not apply partial
    ///   results.
    pub fn parse(
        exercise_minutes: &str,
        calories: &str,
        water_cups: &str,
    ) -> Result<Self, EntryValidationError> {
        Ok(Self {
            exercise_minutes: parse_gauge(EntryField::ExerciseMinutes, exercise_minutes)?,
            calories: parse_gauge(EntryField::Calories, calories)?,
            water_cups: parse_gauge(EntryField::WaterCups, water_cups)?,
        })
    }
}

fn parse_gauge(field: EntryField, raw: &str) -> Result<u32, EntryValidationError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Ok(value);
    }
    match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => Err(EntryValidationError::Negative { field, value }),
        _ => Err(EntryValidationError::NotANumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// One logged day of exercise, calorie and water data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Creation timestamp in epoch milliseconds; unique per collection.
    pub id: RecordId,
    /// Local `DD/MM/YYYY` date derived from `id` at creation time.
    pub date: String,
    pub exercise_minutes: u32,
    pub calories: u32,
    pub water_cups: u32,
}

impl Record {
    /// Creates a record for a freshly issued id, deriving `date` from it.
    pub fn new(id: RecordId, input: EntryInput) -> Self {
        Self {
            id,
            date: format_entry_date(id),
            exercise_minutes: input.exercise_minutes,
            calories: input.calories,
            water_cups: input.water_cups,
        }
    }

    /// Replaces the three gauges, preserving `id` and `date`.
    pub fn apply(&mut self, input: EntryInput) {
        self.exercise_minutes = input.exercise_minutes;
        self.calories = input.calories;
        self.water_cups = input.water_cups;
    }
}

/// Formats a record timestamp as a local `DD/MM/YYYY` display date.
///
/// Out-of-range timestamps render as an empty string; ids issued by the
/// session clock are always in range.
pub fn format_entry_date(epoch_ms: RecordId) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|instant| instant.with_timezone(&Local).format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Formats a record timestamp as a short `DD/MM` chart axis label.
pub fn format_chart_label(epoch_ms: RecordId) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|instant| instant.with_timezone(&Local).format("%d/%m").to_string())
        .unwrap_or_default()
}
