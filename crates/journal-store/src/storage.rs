//! JSON file storage for journal entries.
//!
//! The whole document is read, changed in memory and written back. Writes go
//! through a temporary file that is renamed over the journal, and `append`
//! holds an exclusive lock on `<journal>.lock` for the full cycle.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use fs2::FileExt;
use journal_core::JournalEntry;
use std::fs::{self, OpenOptions};
use tempfile::NamedTempFile;

use crate::schema::JournalDocument;

/// Default journal location, relative to the working directory.
pub const DEFAULT_JOURNAL_PATH: &str = "data/journal_entries.json";

/// JSON-document journal storage.
#[derive(Debug, Clone)]
pub struct JournalStore {
    /// Path to the journal JSON file
    path: Utf8PathBuf,
}

impl JournalStore {
    /// Create a new storage instance.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at [`JournalStore::default_path`].
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Get default storage path.
    ///
    /// Priority:
    /// 1. JOURNAL_PATH environment variable (if set and non-empty)
    /// 2. data/journal_entries.json
    pub fn default_path() -> Utf8PathBuf {
        match std::env::var("JOURNAL_PATH") {
            Ok(custom_path) if !custom_path.trim().is_empty() => Utf8PathBuf::from(custom_path),
            _ => Utf8PathBuf::from(DEFAULT_JOURNAL_PATH),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn lock_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{}.lock", self.path))
    }

    /// Directory holding the journal; `.` for a bare file name.
    fn parent_dir(&self) -> &Utf8Path {
        match self.path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        }
    }

    /// Ensure storage directory exists.
    pub fn ensure_dir(&self) -> Result<()> {
        let parent = self.parent_dir();
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent))?;
        Ok(())
    }

    /// Load the journal. A missing or blank file is an empty journal.
    pub fn load(&self) -> Result<JournalDocument> {
        if !self.path.exists() {
            return Ok(JournalDocument::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read journal: {}", self.path))?;

        if content.trim().is_empty() {
            return Ok(JournalDocument::default());
        }

        let document: JournalDocument = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse journal: {}", self.path))?;

        Ok(document)
    }

    /// Write the whole journal, replacing the file atomically.
    pub fn save(&self, document: &JournalDocument) -> Result<()> {
        self.ensure_dir()?;

        let mut tmp = NamedTempFile::new_in(self.parent_dir())
            .with_context(|| format!("Failed to create temp file next to: {}", self.path))?;
        serde_json::to_writer_pretty(&mut tmp, document)
            .with_context(|| format!("Failed to serialize journal: {}", self.path))?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to write journal: {}", self.path))?;

        tracing::debug!(path = %self.path, entries = document.len(), "journal saved");
        Ok(())
    }

    /// Append an entry and return the new entry count.
    pub fn append(&self, entry: &JournalEntry) -> Result<usize> {
        self.ensure_dir()?;

        let lock_path = self.lock_path();
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file: {}", lock_path))?;
        lock.lock_exclusive()
            .with_context(|| format!("Failed to lock journal: {}", lock_path))?;

        let saved = self.load().and_then(|mut document| {
            document
                .push(entry)
                .with_context(|| format!("Failed to serialize entry for: {}", self.path))?;
            self.save(&document)?;
            Ok(document.len())
        });

        FileExt::unlock(&lock).with_context(|| format!("Failed to unlock journal: {}", lock_path))?;
        let count = saved?;

        tracing::info!(path = %self.path, entries = count, "journal entry appended");
        Ok(count)
    }

    /// Load all readable entries.
    pub fn load_all(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.load()?.journal_entries())
    }

    /// Search entries by text or people (case-insensitive substring match).
    pub fn search(&self, query: &str) -> Result<Vec<JournalEntry>> {
        let query_lower = query.to_lowercase();
        let all = self.load_all()?;
        Ok(all
            .into_iter()
            .filter(|e| {
                e.raw_entry.to_lowercase().contains(&query_lower)
                    || e.people.iter().any(|p| p.to_lowercase().contains(&query_lower))
            })
            .collect())
    }

    /// Get recent entries (last N, oldest first).
    pub fn recent(&self, limit: usize) -> Result<Vec<JournalEntry>> {
        let mut all = self.load_all()?;
        if all.len() > limit {
            all = all.split_off(all.len() - limit);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::EntryTimestamp;
    use tempfile::tempdir;

    fn entry(text: &str) -> JournalEntry {
        let ts = EntryTimestamp::parse("2024-02-02T12:00:00").unwrap();
        JournalEntry::from_text(text, Some(ts))
    }

    fn store_in(dir: &tempfile::TempDir) -> JournalStore {
        let path = dir.path().join("data").join("journal.json");
        JournalStore::new(Utf8PathBuf::from_path_buf(path).unwrap())
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_load() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.append(&entry("I was happy.")).unwrap(), 1);
        assert_eq!(store.append(&entry("Work was busy.")).unwrap(), 2);

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].feelings, vec!["I was happy."]);
        assert_eq!(loaded[1].situations, vec!["Work was busy."]);
    }

    #[test]
    fn test_file_layout() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append(&entry("Café with Zoë.")).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("{\n  \"entries\": [\n    {\n      \"timestamp\""));
        assert!(content.contains("Café with Zoë."));

        let keys = ["\"timestamp\"", "\"raw_entry\"", "\"feelings\"", "\"people\""];
        let positions: Vec<usize> = keys.iter().map(|k| content.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_blank_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.ensure_dir().unwrap();
        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.ensure_dir().unwrap();
        fs::write(store.path(), "{not json").unwrap();

        let err = store.append(&entry("Hello.")).unwrap_err();
        assert!(err.to_string().contains("Failed to parse journal"));
        // The bad file is left untouched.
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{not json");
    }

    #[test]
    fn test_extra_keys_preserved_on_append() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.ensure_dir().unwrap();
        fs::write(store.path(), r#"{"entries": [], "version": 1}"#).unwrap();

        store.append(&entry("Hello.")).unwrap();
        let doc = store.load().unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.extra.get("version"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn test_unknown_entry_fields_preserved_on_append() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append(&entry("First.")).unwrap();

        let mut doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        doc["entries"][0]["mood"] = serde_json::json!("ok");
        fs::write(store.path(), doc.to_string()).unwrap();

        store.append(&entry("Second.")).unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(doc["entries"][0]["mood"], "ok");
        assert_eq!(doc["entries"][1]["raw_entry"], "Second.");
    }

    #[test]
    fn test_append_after_sparse_entry() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.ensure_dir().unwrap();
        fs::write(store.path(), r#"{"entries":[{"raw_entry":"old note"}]}"#).unwrap();

        assert_eq!(store.append(&entry("New note.")).unwrap(), 2);

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded[0].raw_entry, "old note");
        assert_eq!(loaded[1].raw_entry, "New note.");

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(doc["entries"][0], serde_json::json!({"raw_entry": "old note"}));
    }

    #[test]
    fn test_search() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append(&entry("Dinner with Priya.")).unwrap();
        store.append(&entry("Went to the gym.")).unwrap();

        let results = store.search("priya").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].people, vec!["Dinner", "Priya"]);

        assert_eq!(store.search("GYM").unwrap().len(), 1);
        assert!(store.search("beach").unwrap().is_empty());
    }

    #[test]
    fn test_recent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        for text in ["One.", "Two.", "Three."] {
            store.append(&entry(text)).unwrap();
        }

        let recent = store.recent(2).unwrap();
        let texts: Vec<_> = recent.iter().map(|e| e.raw_entry.as_str()).collect();
        assert_eq!(texts, vec!["Two.", "Three."]);
        assert_eq!(store.recent(10).unwrap().len(), 3);
    }

    #[test]
    fn test_concurrent_appends_keep_every_entry() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.append(&entry(&format!("Note {i}."))).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.load_all().unwrap().len(), 8);
    }
}
