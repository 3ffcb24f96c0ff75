//! Sentence splitting.
//!
//! A boundary is a run of whitespace directly after `.`, `!` or `?`. The
//! punctuation stays with the sentence it ends. Abbreviations, decimals and
//! quotes get no special treatment.

use regex::Regex;
use std::sync::LazyLock;

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Lazy iterator over the trimmed, non-empty sentences of a text.
///
/// Clone it before consuming to walk the same sentences again.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

/// Split `text` into sentences.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences {
        text: text.trim(),
        pos: 0,
    }
}

/// Eager form of [`sentences`].
pub fn split_sentences(text: &str) -> Vec<String> {
    sentences(text).map(str::to_string).collect()
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let start = self.pos;
            // Terminal punctuation is ASCII, so the sentence ends one byte
            // past the match start.
            let (end, next) = match BOUNDARY.find_at(self.text, start) {
                Some(m) => (m.start() + 1, m.end()),
                None => (self.text.len(), self.text.len()),
            };
            self.pos = next;

            let sentence = self.text[start..end].trim();
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Sentences<'_> {}
