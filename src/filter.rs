//! Token normalization and filtering
//!
//! Applies case folding and stop-word removal to each token before it is
//! counted.

use std::borrow::Cow;

use crate::stopwords::StopWords;

/// Normalization options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterConfig {
    /// Keep tokens in their original case
    pub case_sensitive: bool,
    /// Drop tokens found in the stop-word set
    pub ignore_common_words: bool,
}

/// Normalizer bound to a stop-word set
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'s> {
    config: FilterConfig,
    stop_words: &'s StopWords,
}

impl<'s> Normalizer<'s> {
    pub fn new(config: FilterConfig, stop_words: &'s StopWords) -> Self {
        Self { config, stop_words }
    }

    /// Normalize a token, or return `None` if it should be dropped
    ///
    /// Stop words are always matched against the lowercase form, so "The"
    /// is dropped even when counting is case-sensitive.
    #[inline]
    pub fn apply<'t>(&self, token: &'t str) -> Option<Cow<'t, str>> {
        let folded = fold_case(token);

        if self.config.ignore_common_words && self.stop_words.contains_folded(&folded) {
            return None;
        }

        if self.config.case_sensitive {
            Some(Cow::Borrowed(token))
        } else {
            Some(folded)
        }
    }
}

/// Lowercase a token, borrowing when it is already lowercase
#[inline]
pub fn fold_case(token: &str) -> Cow<'_, str> {
    if token.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
        Cow::Owned(token.to_lowercase())
    } else {
        Cow::Borrowed(token)
    }
}
