//! Journal entry classification.
//!
//! This crate turns a freeform journal entry into a structured record:
//! - Sentence splitting
//! - Whole-word keyword matching against fixed vocabularies
//! - Feelings / events / health / situations categorization
//! - Capitalized-name extraction
//! - Debug logging of classification results

pub mod categorize;
pub mod debug;
pub mod entry;
pub mod error;
pub mod keywords;
pub mod names;
pub mod sentence;
pub mod timestamp;
pub mod vocabulary;

pub use categorize::{Categories, Categorizer};
pub use debug::{is_debug_enabled, log_classification, ClassificationLog};
pub use entry::{classify, prepare_entry_text, Classifier, JournalEntry};
pub use error::{JournalError, Result};
pub use keywords::{KeywordSet, MatchMode};
pub use names::extract_people;
pub use sentence::{sentences, split_sentences, Sentences};
pub use timestamp::EntryTimestamp;
pub use vocabulary::{Category, Vocabulary};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::entry::{classify, prepare_entry_text, Classifier, JournalEntry};
    pub use crate::error::JournalError;
    pub use crate::timestamp::EntryTimestamp;
    pub use crate::vocabulary::{Category, Vocabulary};
}
