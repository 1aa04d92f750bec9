// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use newsdesk::application::ports::time::Clock;

/// A clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
