// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source for token issuance and upload tickets, injectable so tests
/// can pin the instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
