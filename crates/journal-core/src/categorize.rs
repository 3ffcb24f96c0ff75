//! Sentence categorization.
//!
//! Feelings, events and health are tested independently, so one sentence can
//! land in several of them. Situations are a catch-all: only sentences that
//! are in none of the other three are tested against the situation words.

use std::collections::HashSet;

use crate::error::Result;
use crate::keywords::KeywordSet;
use crate::vocabulary::{Category, Vocabulary};

/// Sentences grouped by category, each list in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    pub feelings: Vec<String>,
    pub events: Vec<String>,
    pub health: Vec<String>,
    pub situations: Vec<String>,
}

/// Compiled matchers for the four categories.
#[derive(Debug, Clone)]
pub struct Categorizer {
    feelings: KeywordSet,
    events: KeywordSet,
    health: KeywordSet,
    situations: KeywordSet,
}

impl Categorizer {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let compile = |category: Category| {
            KeywordSet::with_mode(vocabulary.keywords(category), vocabulary.match_mode)
        };
        Ok(Self {
            feelings: compile(Category::Feeling)?,
            events: compile(Category::Event)?,
            health: compile(Category::Health)?,
            situations: compile(Category::Situation)?,
        })
    }

    pub fn categorize<'a, I>(&self, sentences: I) -> Categories
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sentences: Vec<&str> = sentences.into_iter().collect();
        let mut out = Categories::default();

        for sentence in &sentences {
            if self.feelings.matches(sentence) {
                out.feelings.push(sentence.to_string());
            }
            if self.events.matches(sentence) {
                out.events.push(sentence.to_string());
            }
            if self.health.matches(sentence) {
                out.health.push(sentence.to_string());
            }
        }

        // Membership is by text, so a repeated sentence that was categorized
        // once is excluded from situations everywhere it occurs.
        let categorized: HashSet<&str> = out
            .feelings
            .iter()
            .chain(&out.events)
            .chain(&out.health)
            .map(String::as_str)
            .collect();

        let situations: Vec<String> = sentences
            .iter()
            .filter(|s| !categorized.contains(*s) && self.situations.matches(s))
            .map(|s| s.to_string())
            .collect();
        out.situations = situations;

        out
    }
}
