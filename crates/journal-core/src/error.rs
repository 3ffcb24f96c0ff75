//! Error type for journal classification.

use thiserror::Error;

/// Errors surfaced to callers of the classifier.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Entry text was empty or whitespace-only.
    #[error("No journal entry provided.")]
    EmptyEntry,

    /// An explicit timestamp could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A vocabulary could not be compiled into a matcher.
    #[error("keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, JournalError>;
