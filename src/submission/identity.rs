use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

/// Issues intake ids from the wall clock in milliseconds.
///
/// Ids are strictly increasing for the life of the process: when two intakes
/// land in the same millisecond (or the clock steps back) the later one gets
/// the previous id plus one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an id and receipt time for an intake arriving now.
    pub fn next(&self) -> (u64, DateTime<Utc>) {
        let now = Utc::now();
        (self.next_at(now), now)
    }

    pub fn next_at(&self, now: DateTime<Utc>) -> u64 {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let prev = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(millis.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        millis.max(prev + 1)
    }
}
