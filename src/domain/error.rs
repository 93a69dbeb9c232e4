//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the record model.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("course identifier must not be empty")]
    EmptyIdentifier,
}
