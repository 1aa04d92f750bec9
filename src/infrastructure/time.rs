use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock time.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
