//! Store tunables.
//!
//! # Responsibility
//! - Hold scoring, scheduling and XP constants in one place.
//! - Load overrides from JSON with per-field defaults.
//!
//! # Invariants
//! - `work_hours_start <= work_hours_end <= 23`.
//! - `xp_per_level > 0` and `suggestion_limit > 0`.
//! - `due_soon_minutes` lies in `0..=MAX_DUE_SOON_MINUTES`.
//! - Each XP constant is at most `MAX_XP_CONSTANT`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One week.
pub const MAX_DUE_SOON_MINUTES: i64 = 7 * 24 * 60;
pub const MAX_XP_CONSTANT: u32 = 10_000;

/// Configuration consumed by `TaskStore` and its helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of smart suggestions returned.
    pub suggestion_limit: usize,
    /// Tasks due within this window receive the "due soon" bonus.
    pub due_soon_minutes: i64,
    /// First local hour counted as work time (inclusive).
    pub work_hours_start: u32,
    /// Last local hour counted as work time (inclusive).
    pub work_hours_end: u32,
    /// Interval at which hosts should call `TaskStore::refresh_mood`.
    pub mood_poll_interval_secs: u64,
    pub xp_per_task: u32,
    pub xp_per_subtask: u32,
    pub xp_per_habit_check_in: u32,
    pub xp_per_level: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 3,
            due_soon_minutes: 120,
            work_hours_start: 9,
            work_hours_end: 17,
            mood_poll_interval_secs: 15,
            xp_per_task: 10,
            xp_per_subtask: 2,
            xp_per_habit_check_in: 5,
            xp_per_level: 100,
        }
    }
}

impl StoreConfig {
    /// Parses a JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or wrong field types.
    /// - `ConfigError::Invalid` when a range invariant is violated.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.work_hours_end > 23 {
            return Err(ConfigError::Invalid(format!(
                "work_hours_end must be <= 23, got {}",
                self.work_hours_end
            )));
        }
        if self.work_hours_start > self.work_hours_end {
            return Err(ConfigError::Invalid(format!(
                "work_hours_start {} is after work_hours_end {}",
                self.work_hours_start, self.work_hours_end
            )));
        }
        if self.xp_per_level == 0 {
            return Err(ConfigError::Invalid(
                "xp_per_level must be positive".to_string(),
            ));
        }
        if !(0..=MAX_DUE_SOON_MINUTES).contains(&self.due_soon_minutes) {
            return Err(ConfigError::Invalid(format!(
                "due_soon_minutes must be in 0..={MAX_DUE_SOON_MINUTES}, got {}",
                self.due_soon_minutes
            )));
        }
        for (name, value) in [
            ("xp_per_task", self.xp_per_task),
            ("xp_per_subtask", self.xp_per_subtask),
            ("xp_per_habit_check_in", self.xp_per_habit_check_in),
            ("xp_per_level", self.xp_per_level),
        ] {
            if value > MAX_XP_CONSTANT {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be <= {MAX_XP_CONSTANT}, got {value}"
                )));
            }
        }
        if self.suggestion_limit == 0 {
            return Err(ConfigError::Invalid(
                "suggestion_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_work_hour(&self, hour: u32) -> bool {
        (self.work_hours_start..=self.work_hours_end).contains(&hour)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid store config: {err}"),
            Self::Invalid(message) => write!(f, "invalid store config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StoreConfig};

    #[test]
    fn partial_json_keeps_defaults() {
        let config = StoreConfig::from_json_str(r#"{"suggestion_limit": 5}"#).unwrap();
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.due_soon_minutes, 120);
        assert_eq!(config.xp_per_level, 100);
    }

    #[test]
    fn rejects_inverted_work_hours() {
        let err = StoreConfig::from_json_str(r#"{"work_hours_start": 18, "work_hours_end": 9}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = StoreConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range_due_soon_window() {
        for raw in [
            r#"{"due_soon_minutes": 9223372036854775807}"#,
            r#"{"due_soon_minutes": -1}"#,
        ] {
            let err = StoreConfig::from_json_str(raw).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{raw}");
        }
        let week = StoreConfig::from_json_str(r#"{"due_soon_minutes": 10080}"#).unwrap();
        assert_eq!(week.due_soon_minutes, 10_080);
    }

    #[test]
    fn rejects_oversized_xp_constants() {
        let err = StoreConfig::from_json_str(r#"{"xp_per_task": 4294967295}"#).unwrap_err();
        assert!(err.to_string().contains("xp_per_task"));
        let err = StoreConfig::from_json_str(r#"{"xp_per_level": 10001}"#).unwrap_err();
        assert!(err.to_string().contains("xp_per_level"));
    }

    #[test]
    fn work_hours_are_inclusive() {
        let config = StoreConfig::default();
        assert!(config.is_work_hour(9));
        assert!(config.is_work_hour(17));
        assert!(!config.is_work_hour(18));
        assert!(!config.is_work_hour(8));
    }
}
