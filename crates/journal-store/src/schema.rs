//! On-disk journal document.

use journal_core::JournalEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The journal file: `{"entries": [...]}`.
///
/// Entries stay as raw JSON objects so a rewrite keeps every stored field,
/// including ones [`JournalEntry`] does not model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalDocument {
    /// Entries in the order they were added
    #[serde(default)]
    pub entries: Vec<Value>,

    /// Unknown top-level keys, kept so rewriting the file does not drop them
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl JournalDocument {
    pub fn push(&mut self, entry: &JournalEntry) -> serde_json::Result<()> {
        self.entries.push(serde_json::to_value(entry)?);
        Ok(())
    }

    /// Decode the stored entries, skipping any that are not entry objects.
    pub fn journal_entries(&self) -> Vec<JournalEntry> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, value)| match JournalEntry::deserialize(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unreadable journal entry");
                    None
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
