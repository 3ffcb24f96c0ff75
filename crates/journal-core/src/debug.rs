//! Debug logging for classification.
//!
//! Appends one JSONL record per classified entry so keyword hits can be
//! reviewed later. Disabled unless `JOURNAL_DEBUG` is set.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;

use crate::entry::JournalEntry;

/// Debug log record for one classified entry.
#[derive(Debug, Serialize)]
pub struct ClassificationLog {
    /// When the record was written
    pub logged_at: DateTime<Utc>,
    /// Entry timestamp as stored
    pub entry_timestamp: String,
    /// Entry text summary (truncated for large entries)
    pub entry_summary: String,
    pub sentence_count: usize,
    pub feelings: usize,
    pub events: usize,
    pub health: usize,
    pub situations: usize,
    pub people: Vec<String>,
}

impl ClassificationLog {
    pub fn new(entry: &JournalEntry, sentence_count: usize) -> Self {
        Self {
            logged_at: Utc::now(),
            entry_timestamp: entry.timestamp.clone(),
            entry_summary: truncate(&entry.raw_entry, 200),
            sentence_count,
            feelings: entry.feelings.len(),
            events: entry.events.len(),
            health: entry.health.len(),
            situations: entry.situations.len(),
            people: entry.people.clone(),
        }
    }

    /// Write the record to the debug log if debug mode is on.
    pub fn write(&self) -> std::io::Result<()> {
        if !is_debug_enabled() {
            return Ok(());
        }
        self.write_to(&debug_log_path())
    }

    /// Append the record to `path` unconditionally.
    pub fn write_to(&self, path: &Utf8Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(self).map_err(std::io::Error::other)?;

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", json)?;

        Ok(())
    }
}

/// Check if debug mode is enabled.
pub fn is_debug_enabled() -> bool {
    std::env::var_os("JOURNAL_DEBUG").is_some()
}

/// Debug log file path.
///
/// `JOURNAL_DEBUG_LOG` overrides the default `data/logs/classify-debug.jsonl`.
pub fn debug_log_path() -> Utf8PathBuf {
    match std::env::var("JOURNAL_DEBUG_LOG") {
        Ok(path) => Utf8PathBuf::from(path),
        Err(_) => Utf8PathBuf::from("data")
            .join("logs")
            .join("classify-debug.jsonl"),
    }
}

/// Log a classified entry, ignoring write failures.
pub fn log_classification(entry: &JournalEntry, sentence_count: usize) {
    let log = ClassificationLog::new(entry, sentence_count);
    if let Err(e) = log.write() {
        tracing::warn!(error = %e, "failed to write classification debug log");
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::EntryTimestamp;
    use tempfile::tempdir;

    fn entry(text: &str) -> JournalEntry {
        let ts = EntryTimestamp::parse("2024-01-02T03:04:05").unwrap();
        JournalEntry::from_text(text, Some(ts))
    }

    #[test]
    fn test_log_serialization() {
        let log = ClassificationLog::new(&entry("I was happy. Bob came."), 2);

        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"entry_timestamp\":\"2024-01-02T03:04:05\""));
        assert!(json.contains("\"feelings\":1"));
        assert!(json.contains("\"people\":[\"Bob\"]"));
        assert!(json.contains("\"sentence_count\":2"));
    }

    #[test]
    fn test_truncation() {
        let long_text = "é".repeat(500);
        let log = ClassificationLog::new(&entry(&long_text), 1);
        assert_eq!(log.entry_summary.chars().count(), 203); // 200 + "..."
    }

    #[test]
    fn test_write_to_appends_lines() {
        let dir = tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("logs/debug.jsonl")).unwrap();

        let log = ClassificationLog::new(&entry("Quiet."), 1);
        log.write_to(&path).unwrap();
        log.write_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        for line in content.lines() {
            let record: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(record["entry_summary"], "Quiet.");
        }
    }
}
