//! Tokenizer
//!
//! Splits text into words. A word is a run of Unicode letters and digits;
//! everything else (whitespace, punctuation, underscores) separates words.
//! Optionally a single apostrophe or hyphen between two runs keeps them
//! together, so "don't" and "well-known" stay whole.

use regex::{Matches, Regex};

/// Letters and digits, with combining marks allowed after the first char
const WORD_RUN: &str = r"[\p{L}\p{N}][\p{L}\p{N}\p{M}]*";

/// Tokenizer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Join runs separated by a single `'` or `’`
    pub join_apostrophes: bool,
    /// Join runs separated by a single `-`
    pub join_hyphens: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            join_apostrophes: true,
            join_hyphens: true,
        }
    }
}

impl TokenizerConfig {
    /// Build the regex source for this configuration
    fn pattern(&self) -> String {
        let joiners = match (self.join_apostrophes, self.join_hyphens) {
            (true, true) => Some(r"['’\-]"),
            (true, false) => Some(r"['’]"),
            (false, true) => Some(r"\-"),
            (false, false) => None,
        };

        match joiners {
            Some(joiner) => format!("{WORD_RUN}(?:{joiner}{WORD_RUN})*"),
            None => WORD_RUN.to_string(),
        }
    }
}

/// Word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        let regex = Regex::new(&config.pattern()).expect("tokenizer pattern is a valid regex");
        Self { regex }
    }

    /// Lazily iterate over the words of `text`
    ///
    /// The iterator borrows both the tokenizer and the text; call again to
    /// restart from the beginning.
    pub fn tokens<'r, 't>(&'r self, text: &'t str) -> Tokens<'r, 't> {
        Tokens {
            inner: self.regex.find_iter(text),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

/// Iterator over the words of a text
#[derive(Debug)]
pub struct Tokens<'r, 't> {
    inner: Matches<'r, 't>,
}

impl<'r, 't> Iterator for Tokens<'r, 't> {
    type Item = &'t str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| m.as_str())
    }
}
