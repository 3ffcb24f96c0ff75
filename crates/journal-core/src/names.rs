//! Capitalized-name heuristic for people mentioned in an entry.
//!
//! Any run of Titlecase words is a candidate, so sentence-initial words and
//! capitalized places show up too. Lowercase names are missed.

use std::collections::BTreeSet;

use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s[A-Z][a-z]+)*\b").expect("name pattern is valid")
});

/// Extract candidate names from raw text.
///
/// A candidate is dropped only when the whole candidate equals a stop word;
/// "Today" is dropped but "Today Mary" is kept. Results are distinct and
/// sorted.
pub fn extract_people(text: &str, stop_words: &BTreeSet<String>) -> Vec<String> {
    let candidates: BTreeSet<&str> = NAME_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| !stop_words.contains(*candidate))
        .collect();

    candidates.into_iter().map(str::to_string).collect()
}
