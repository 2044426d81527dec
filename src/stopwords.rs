//! Stop-word set
//!
//! A read-only set of common English words that can be excluded from
//! counting. Entries are stored lowercase.

use ahash::RandomState;
use hashbrown::HashSet;

/// Built-in English stop words
pub static COMMON_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "my", "your", "his", "its", "our", "their",
];

/// A set of words to exclude from counting
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String, RandomState>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StopWords {
    /// The built-in English list
    pub fn builtin() -> Self {
        Self::from_list(COMMON_WORDS)
    }

    /// An empty set (nothing is a stop word)
    pub fn empty() -> Self {
        Self {
            words: HashSet::with_hasher(RandomState::new()),
        }
    }

    /// Build a set from a custom list; words are lowercased
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut set = HashSet::with_capacity_and_hasher(words.len(), RandomState::new());
        for word in words {
            set.insert(word.as_ref().to_lowercase());
        }
        Self { words: set }
    }

    /// Check a word that is already lowercase
    #[inline]
    pub fn contains_folded(&self, folded: &str) -> bool {
        self.words.contains(folded)
    }

    /// Check a word in any case
    pub fn contains(&self, word: &str) -> bool {
        self.contains_folded(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
