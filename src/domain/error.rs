//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the form model.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown entry kind: {0} (expected publication or project)")]
    UnknownEntryKind(String),
}
