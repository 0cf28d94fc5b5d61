//! Timestamp value object for session activity tracking.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    pub fn plus_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.0 >= before);
        assert!(ts.0 <= after);
    }

    #[test]
    fn timestamps_order_chronologically() {
        let ts1 = Timestamp::now();
        let ts2 = ts1.plus_secs(1);

        assert!(ts1 < ts2);
    }

    #[test]
    fn timestamp_duration_since_is_signed() {
        let ts1 = Timestamp::now();
        let ts2 = ts1.plus_secs(90);

        assert_eq!(ts2.duration_since(&ts1).num_seconds(), 90);
        assert_eq!(ts1.duration_since(&ts2).num_seconds(), -90);
    }

    #[test]
    fn timestamp_serializes_as_rfc3339() {
        let ts = Timestamp::now();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
        assert!(json.contains('T'));
    }
}
