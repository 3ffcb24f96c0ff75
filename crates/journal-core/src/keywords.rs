//! Whole-word, case-insensitive keyword matching.

use crate::error::Result;
use regex::Regex;

/// Regular inflections accepted after a keyword in [`MatchMode::Inflected`].
const INFLECTIONS: &str = "(?:s|es|ed|ing)?";

/// How a keyword must appear in a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The keyword itself, delimited by word boundaries.
    Exact,
    /// The keyword optionally followed by -s, -es, -ed or -ing, delimited by
    /// word boundaries. "rained" matches `rain`; "gamer" never matches `game`.
    #[default]
    Inflected,
}

/// A compiled set of lowercase keywords.
///
/// A sentence matches when any keyword appears in it delimited by word
/// boundaries, so `game` matches "Game night" but not "gamer".
#[derive(Debug, Clone)]
pub struct KeywordSet {
    pattern: Option<Regex>,
}

impl KeywordSet {
    /// Compile a keyword set in [`MatchMode::Inflected`].
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_mode(words, MatchMode::default())
    }

    /// Compile a keyword set. Keywords are lowercased and regex-escaped.
    pub fn with_mode<I, S>(words: I, mode: MatchMode) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let escaped: Vec<String> = words
            .into_iter()
            .map(|w| regex::escape(&w.as_ref().to_lowercase()))
            .filter(|w| !w.is_empty())
            .collect();

        if escaped.is_empty() {
            return Ok(Self { pattern: None });
        }

        let suffix = match mode {
            MatchMode::Exact => "",
            MatchMode::Inflected => INFLECTIONS,
        };
        let pattern = Regex::new(&format!(r"\b(?:{}){}\b", escaped.join("|"), suffix))?;
        Ok(Self { pattern: Some(pattern) })
    }

    /// Check if any keyword occurs as a whole word in `sentence`.
    pub fn matches(&self, sentence: &str) -> bool {
        match &self.pattern {
            Some(re) => re.is_match(&sentence.to_lowercase()),
            None => false,
        }
    }

}
