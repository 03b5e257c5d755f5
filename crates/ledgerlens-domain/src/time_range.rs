use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional interval used to filter accounts and operations.
///
/// Either bound may be absent, meaning unbounded in that direction. Both
/// bounds are exclusive: `t` is contained when `t > start` and `t < end`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn until(end: DateTime<Utc>) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn is_after_start(&self, timestamp: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| timestamp > start)
    }

    pub fn is_before_end(&self, timestamp: DateTime<Utc>) -> bool {
        self.end.map_or(true, |end| timestamp < end)
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.is_after_start(timestamp) && self.is_before_end(timestamp)
    }

    /// Returns both bounds when the range is closed on each side.
    pub fn require_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.start?, self.end?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn unbounded_contains_everything() {
        let range = TimeRange::unbounded();
        assert!(range.is_unbounded());
        assert!(range.contains(at(1)));
        assert!(range.require_bounds().is_none());
    }

    #[test]
    fn bounds_are_exclusive() {
        let range = TimeRange::new(at(1), at(10));
        assert!(!range.contains(at(1)));
        assert!(!range.contains(at(10)));
        assert!(range.contains(at(1) + Duration::seconds(1)));
        assert!(range.contains(at(9)));
    }

    #[test]
    fn one_sided_ranges() {
        assert!(TimeRange::since(at(5)).contains(at(20)));
        assert!(!TimeRange::since(at(5)).contains(at(5)));
        assert!(TimeRange::until(at(5)).contains(at(1)));
        assert!(!TimeRange::until(at(5)).contains(at(5)));
        assert!(TimeRange::until(at(5)).require_bounds().is_none());
    }
}
