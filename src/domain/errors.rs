// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures the domain layer can produce on its own: invariant violations
/// at construction time, and store-level rejections surfaced by the
/// repositories. Absence of a record is not a domain error; reads return
/// `Option` and the application layer decides what missing means.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
