//! Classified journal entries.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::categorize::{Categories, Categorizer};
use crate::error::{JournalError, Result};
use crate::names::extract_people;
use crate::sentence::sentences;
use crate::timestamp::EntryTimestamp;
use crate::vocabulary::Vocabulary;

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
    Classifier::new(Vocabulary::default()).expect("built-in vocabulary compiles")
});

/// A journal entry split into themed sections.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// ISO-8601, seconds precision
    #[serde(default)]
    pub timestamp: String,

    /// Entry text, trimmed
    #[serde(default)]
    pub raw_entry: String,

    #[serde(default)]
    pub feelings: Vec<String>,

    #[serde(default)]
    pub events: Vec<String>,

    #[serde(default)]
    pub health: Vec<String>,

    /// Sentences with context words not already in another section
    #[serde(default)]
    pub situations: Vec<String>,

    /// Sorted candidate names
    #[serde(default)]
    pub people: Vec<String>,
}

impl JournalEntry {
    /// Classify `text` with the built-in vocabulary.
    pub fn from_text(text: &str, timestamp: Option<EntryTimestamp>) -> Self {
        Classifier::shared().classify(text, timestamp)
    }
}

/// Entry classifier bound to one vocabulary.
#[derive(Debug, Clone)]
pub struct Classifier {
    vocabulary: Vocabulary,
    categorizer: Categorizer,
}

impl Classifier {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let categorizer = Categorizer::new(&vocabulary)?;
        Ok(Self {
            vocabulary,
            categorizer,
        })
    }

    /// Process-wide classifier over the built-in vocabulary.
    pub fn shared() -> &'static Classifier {
        &DEFAULT_CLASSIFIER
    }

    /// Build an entry from raw text.
    ///
    /// Uses the current local time when `timestamp` is `None`. Empty text
    /// yields empty sections rather than an error.
    pub fn classify(&self, text: &str, timestamp: Option<EntryTimestamp>) -> JournalEntry {
        let timestamp = timestamp.unwrap_or_else(EntryTimestamp::now);
        let Categories {
            feelings,
            events,
            health,
            situations,
        } = self.categorizer.categorize(sentences(text));
        let people = extract_people(text, &self.vocabulary.stop_words);

        tracing::debug!(
            feelings = feelings.len(),
            events = events.len(),
            health = health.len(),
            situations = situations.len(),
            people = people.len(),
            "classified entry"
        );

        JournalEntry {
            timestamp: timestamp.to_iso_seconds(),
            raw_entry: text.trim().to_string(),
            feelings,
            events,
            health,
            situations,
            people,
        }
    }
}

/// Classify `text`, parsing an optional ISO-8601 timestamp first.
pub fn classify(text: &str, timestamp: Option<&str>) -> Result<JournalEntry> {
    let timestamp = timestamp.map(EntryTimestamp::parse).transpose()?;
    Ok(JournalEntry::from_text(text, timestamp))
}

/// Trim entry text, rejecting empty input.
pub fn prepare_entry_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(JournalError::EmptyEntry);
    }
    Ok(trimmed)
}
