//! Habit domain model.
//!
//! # Invariants
//! - `completed_dates` holds each calendar day at most once.
//! - `streak` is non-negative; see `service::streak` for how it moves.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a habit.
pub type HabitId = Uuid;

/// Daily habit with its check-in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    pub streak: u32,
    /// Serialized as an ascending `YYYY-MM-DD` list.
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
    pub created_at: DateTime<FixedOffset>,
}

impl Habit {
    /// Creates a habit with zero streak and empty history.
    pub fn new(title: impl Into<String>, created_at: DateTime<FixedOffset>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            streak: 0,
            completed_dates: BTreeSet::new(),
            created_at,
        }
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    pub fn validate(&self) -> Result<(), HabitValidationError> {
        if self.title.trim().is_empty() {
            return Err(HabitValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Validation errors for habit records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    EmptyTitle,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "habit title cannot be empty"),
        }
    }
}

impl Error for HabitValidationError {}

#[cfg(test)]
mod tests {
    use super::Habit;
    use chrono::{DateTime, NaiveDate};

    #[test]
    fn completed_dates_serialize_as_sorted_day_strings() {
        let created_at = DateTime::parse_from_rfc3339("2024-01-01T08:00:00+00:00").unwrap();
        let mut habit = Habit::new("Read 20 pages", created_at);
        habit
            .completed_dates
            .insert(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        habit
            .completed_dates
            .insert(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(
            json["completed_dates"],
            serde_json::json!(["2024-01-02", "2024-01-03"])
        );
    }
}
