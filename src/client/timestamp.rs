//! Wall-clock time of the most recent successful request

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared, lock-free record of the last successful response
///
/// Holds Unix-epoch milliseconds, `0` until the first success. Clones share
/// the same counter, and the stored value never moves backwards even if the
/// system clock does.
#[derive(Debug, Clone, Default)]
pub struct LastSuccess {
    millis: Arc<AtomicU64>,
}

impl LastSuccess {
    /// Create a counter that has never recorded a success
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the Unix epoch of the last success, `0` if none
    #[must_use]
    pub fn load(&self) -> u64 {
        self.millis.load(Ordering::Acquire)
    }

    /// Record a success at `millis`, keeping the later of old and new
    pub fn record(&self, millis: u64) {
        let _ = self.millis.fetch_max(millis, Ordering::AcqRel);
    }

    /// Record a success at the current wall-clock time and return it
    pub fn record_now(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.record(now);
        now
    }

    /// Last success as a UTC timestamp, `None` before the first one
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self.load() {
            0 => None,
            millis => DateTime::from_timestamp_millis(i64::try_from(millis).ok()?),
        }
    }
}
