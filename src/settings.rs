use chrono::{Duration, FixedOffset};
use ledgerlens_config::{AnalyticsConfig, ConfigError};
use ledgerlens_core::{AnalyticsEngine, EngineSettings, GranularityPolicy};

/// Projects the persisted configuration onto engine settings.
pub fn engine_settings(config: &AnalyticsConfig) -> Result<EngineSettings, ConfigError> {
    config.validate()?;
    let utc_offset = FixedOffset::east_opt(config.utc_offset_minutes * 60).ok_or_else(|| {
        ConfigError::Invalid(format!(
            "unsupported utc offset of {} minutes",
            config.utc_offset_minutes
        ))
    })?;
    Ok(EngineSettings {
        new_account_window: Duration::days(i64::from(config.new_account_window_days)),
        recent_activity_window: Duration::days(i64::from(config.recent_activity_days)),
        granularity_policy: if config.strict_granularity {
            GranularityPolicy::Strict
        } else {
            GranularityPolicy::Lenient
        },
        utc_offset,
    })
}

pub fn engine_from_config(config: &AnalyticsConfig) -> Result<AnalyticsEngine, ConfigError> {
    engine_settings(config).map(AnalyticsEngine::new)
}
