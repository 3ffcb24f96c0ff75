//! Persistence for classified journal entries.
//!
//! Provides:
//! - Journal document schema
//! - JSON file storage with locked appends

pub mod schema;
pub mod storage;

pub use schema::JournalDocument;
pub use storage::{JournalStore, DEFAULT_JOURNAL_PATH};
