//! Keyword vocabularies and name stop words.
//!
//! The built-in lists are fixed at compile time. A [`Vocabulary`] bundles
//! them into one immutable value that a classifier is built from.

use std::collections::BTreeSet;

use crate::keywords::MatchMode;

pub const FEELING_KEYWORDS: &[&str] = &[
    "happy",
    "joy",
    "joyful",
    "glad",
    "excited",
    "content",
    "peaceful",
    "sad",
    "upset",
    "angry",
    "frustrated",
    "anxious",
    "nervous",
    "worried",
    "calm",
    "relaxed",
    "tired",
    "exhausted",
    "stressed",
    "grateful",
    "thankful",
    "lonely",
    "confident",
    "proud",
    "hopeful",
];

pub const EVENT_KEYWORDS: &[&str] = &[
    "meeting",
    "birthday",
    "anniversary",
    "party",
    "presentation",
    "conference",
    "interview",
    "deadline",
    "vacation",
    "trip",
    "wedding",
    "graduation",
    "celebration",
    "appointment",
    "game",
    "practice",
    "ceremony",
];

pub const HEALTH_KEYWORDS: &[&str] = &[
    "exercise",
    "workout",
    "gym",
    "run",
    "running",
    "walk",
    "walking",
    "yoga",
    "meditation",
    "doctor",
    "dentist",
    "medicine",
    "medication",
    "pill",
    "headache",
    "stomach",
    "flu",
    "cold",
    "fever",
    "pain",
    "ache",
    "injury",
    "therapy",
    "sleep",
    "rest",
    "hydrate",
    "hydrated",
    "nutrition",
    "diet",
];

pub const SITUATION_KEYWORDS: &[&str] = &[
    "work",
    "office",
    "project",
    "school",
    "class",
    "lesson",
    "family",
    "friends",
    "home",
    "travel",
    "commute",
    "study",
    "exam",
    "shopping",
    "errand",
    "cooking",
    "cleaning",
    "house",
    "weather",
    "rain",
    "sunny",
    "storm",
];

/// Capitalized words that are never reported as people.
pub const STOP_WORDS: &[&str] = &[
    "I",
    "We",
    "My",
    "The",
    "A",
    "An",
    "It",
    "He",
    "She",
    "They",
    "Today",
    "Tonight",
    "Morning",
    "Evening",
    "Afternoon",
    "Later",
    "Yesterday",
    "Tomorrow",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The four sentence categories, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Feeling,
    Event,
    Health,
    Situation,
}

/// Immutable set of keyword lists plus stop words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub feelings: BTreeSet<String>,
    pub events: BTreeSet<String>,
    pub health: BTreeSet<String>,
    pub situations: BTreeSet<String>,
    pub stop_words: BTreeSet<String>,
    pub match_mode: MatchMode,
}

impl Vocabulary {
    /// Create an empty vocabulary. Nothing matches and no names are filtered.
    pub fn empty() -> Self {
        Self {
            feelings: BTreeSet::new(),
            events: BTreeSet::new(),
            health: BTreeSet::new(),
            situations: BTreeSet::new(),
            stop_words: BTreeSet::new(),
            match_mode: MatchMode::default(),
        }
    }

    /// Replace the word list for one category. Words are lowercased.
    pub fn with_keywords<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        *self.keywords_mut(category) = words;
        self
    }

    /// Replace the stop word list. Stop words are kept verbatim.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Keywords for a category.
    pub fn keywords(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Feeling => &self.feelings,
            Category::Event => &self.events,
            Category::Health => &self.health,
            Category::Situation => &self.situations,
        }
    }

    fn keywords_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Feeling => &mut self.feelings,
            Category::Event => &mut self.events,
            Category::Health => &mut self.health,
            Category::Situation => &mut self.situations,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::empty()
            .with_keywords(Category::Feeling, FEELING_KEYWORDS)
            .with_keywords(Category::Event, EVENT_KEYWORDS)
            .with_keywords(Category::Health, HEALTH_KEYWORDS)
            .with_keywords(Category::Situation, SITUATION_KEYWORDS)
            .with_stop_words(STOP_WORDS.iter().copied())
    }
}
