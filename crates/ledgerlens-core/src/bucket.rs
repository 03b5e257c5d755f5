//! Calendar bucketing for transaction series.
//!
//! Bucket keys are zero-padded strings whose lexicographic order is their
//! chronological order, so a series is ordered by sorting keys directly.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Width of a series bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }

    fn recognize(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Granularity::Daily),
            "weekly" => Some(Granularity::Weekly),
            "monthly" => Some(Granularity::Monthly),
            _ => None,
        }
    }

    /// Case-insensitive parse that falls back to [`Granularity::Daily`].
    pub fn parse_lenient(value: &str) -> Self {
        Self::recognize(value).unwrap_or_else(|| {
            tracing::warn!(interval = value, "unrecognized interval, using daily buckets");
            Granularity::Daily
        })
    }

    pub fn parse_strict(value: &str) -> CoreResult<Self> {
        Self::recognize(value).ok_or_else(|| CoreError::UnknownGranularity(value.to_string()))
    }

    pub fn parse_with(value: &str, policy: GranularityPolicy) -> CoreResult<Self> {
        match policy {
            GranularityPolicy::Lenient => Ok(Self::parse_lenient(value)),
            GranularityPolicy::Strict => Self::parse_strict(value),
        }
    }
}

impl FromStr for Granularity {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(value)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How unrecognized granularity strings are handled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum GranularityPolicy {
    #[default]
    Lenient,
    Strict,
}

/// Maps timestamps to bucket keys in a fixed reference time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalBucketer {
    offset: FixedOffset,
}

impl Default for IntervalBucketer {
    fn default() -> Self {
        Self::utc()
    }
}

impl IntervalBucketer {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the canonical key of the bucket containing `timestamp`.
    ///
    /// * daily: `YYYY-MM-DD`
    /// * weekly: `YYYY-Www`, ISO-8601 week-numbering year and week, so the
    ///   last days of December may land in week 01 of the next year
    /// * monthly: `YYYY-MM`
    pub fn key(&self, timestamp: DateTime<Utc>, granularity: Granularity) -> String {
        let local = timestamp.with_timezone(&self.offset);
        match granularity {
            Granularity::Daily => format!(
                "{:04}-{:02}-{:02}",
                local.year(),
                local.month(),
                local.day()
            ),
            Granularity::Weekly => {
                let week = local.iso_week();
                format!("{:04}-W{:02}", week.year(), week.week())
            }
            Granularity::Monthly => format!("{:04}-{:02}", local.year(), local.month()),
        }
    }
}

/// Bucket key in UTC.
pub fn bucket_key(timestamp: DateTime<Utc>, granularity: Granularity) -> String {
    IntervalBucketer::utc().key(timestamp, granularity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn formats_each_granularity() {
        let ts = at(2024, 3, 7, 15);
        assert_eq!(bucket_key(ts, Granularity::Daily), "2024-03-07");
        assert_eq!(bucket_key(ts, Granularity::Weekly), "2024-W10");
        assert_eq!(bucket_key(ts, Granularity::Monthly), "2024-03");
    }

    #[test]
    fn weekly_keys_follow_iso_week_year() {
        assert_eq!(bucket_key(at(2024, 12, 30, 9), Granularity::Weekly), "2025-W01");
        assert_eq!(bucket_key(at(2021, 1, 1, 9), Granularity::Weekly), "2020-W53");
    }

    #[test]
    fn keys_sort_chronologically() {
        let stamps = [
            at(2023, 12, 31, 0),
            at(2024, 1, 2, 0),
            at(2024, 2, 9, 0),
            at(2024, 10, 1, 0),
            at(2025, 1, 15, 0),
        ];
        for granularity in [Granularity::Daily, Granularity::Weekly, Granularity::Monthly] {
            let keys: Vec<String> = stamps.iter().map(|ts| bucket_key(*ts, granularity)).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted, "{granularity} keys out of order");
        }
    }

    #[test]
    fn offset_shifts_calendar_day() {
        let ts = at(2024, 3, 31, 23);
        let plus_two = IntervalBucketer::new(FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(plus_two.key(ts, Granularity::Daily), "2024-04-01");
        assert_eq!(plus_two.key(ts, Granularity::Monthly), "2024-04");
        assert_eq!(bucket_key(ts, Granularity::Monthly), "2024-03");
    }

    #[test]
    fn lenient_parse_defaults_to_daily() {
        assert_eq!(Granularity::parse_lenient("WEEKLY"), Granularity::Weekly);
        assert_eq!(Granularity::parse_lenient(" Monthly "), Granularity::Monthly);
        assert_eq!(Granularity::parse_lenient("hourly"), Granularity::Daily);
        assert_eq!(Granularity::parse_lenient(""), Granularity::Daily);
    }

    #[test]
    fn strict_parse_rejects_unknown_values() {
        let err = Granularity::parse_strict("hourly").expect_err("hourly is not supported");
        assert!(matches!(err, CoreError::UnknownGranularity(value) if value == "hourly"));
        assert_eq!("Daily".parse::<Granularity>().unwrap(), Granularity::Daily);
        assert!(Granularity::parse_with("yearly", GranularityPolicy::Strict).is_err());
        assert_eq!(
            Granularity::parse_with("yearly", GranularityPolicy::Lenient).unwrap(),
            Granularity::Daily
        );
    }
}
