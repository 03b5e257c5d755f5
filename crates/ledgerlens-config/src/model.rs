use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

const MAX_OFFSET_MINUTES: u32 = 18 * 60;
/// Upper bound for the look-back windows, roughly a century.
const MAX_WINDOW_DAYS: u32 = 36_500;

/// Tunables for dashboard analytics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Look-back used for "new accounts" when no range start is given.
    #[serde(default = "AnalyticsConfig::default_new_account_window_days")]
    pub new_account_window_days: u32,
    #[serde(default = "AnalyticsConfig::default_recent_activity_days")]
    pub recent_activity_days: u32,
    #[serde(default = "AnalyticsConfig::default_granularity_value")]
    pub default_granularity: String,
    /// Reject unknown intervals instead of falling back to daily buckets.
    #[serde(default)]
    pub strict_granularity: bool,
    /// Offset from UTC of the calendar used for buckets.
    #[serde(default)]
    pub utc_offset_minutes: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            new_account_window_days: Self::default_new_account_window_days(),
            recent_activity_days: Self::default_recent_activity_days(),
            default_granularity: Self::default_granularity_value(),
            strict_granularity: false,
            utc_offset_minutes: 0,
            snapshot_path: None,
        }
    }
}

impl AnalyticsConfig {
    pub fn default_new_account_window_days() -> u32 {
        30
    }

    pub fn default_recent_activity_days() -> u32 {
        7
    }

    pub fn default_granularity_value() -> String {
        "daily".into()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.utc_offset_minutes.unsigned_abs() >= MAX_OFFSET_MINUTES {
            return Err(ConfigError::Invalid(format!(
                "utc_offset_minutes must be within ±{} (got {})",
                MAX_OFFSET_MINUTES, self.utc_offset_minutes
            )));
        }
        for (name, days) in [
            ("new_account_window_days", self.new_account_window_days),
            ("recent_activity_days", self.recent_activity_days),
        ] {
            if days > MAX_WINDOW_DAYS {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be at most {MAX_WINDOW_DAYS} (got {days})"
                )));
            }
        }
        if self.default_granularity.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_granularity must not be empty".into(),
            ));
        }
        Ok(())
    }
}
