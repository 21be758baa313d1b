//! Unit tests for the task domain and use cases.


use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

/// Clock that advances by a fixed step on every reading.
pub(super) struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub(super) fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2025, 1, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self {
            next: Mutex::new(start),
            step: Duration::seconds(1),
        }
    }

    /// Moves the clock back by `by`, simulating clock skew.
    pub(super) fn rewind(&self, by: Duration) {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        *next -= by;
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let now = *next;
        *next = now + self.step;
        now
    }
}
