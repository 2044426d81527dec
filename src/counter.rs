//! Frequency table
//!
//! Maps each token to the number of times it was seen. The table is filled
//! in a single pass and then only read.

use ahash::RandomState;
use hashbrown::HashMap;

/// Token occurrence counts
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64, RandomState>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token produced by `tokens`
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.record(token.as_ref());
        }
        table
    }

    /// Build a table directly from `(token, count)` pairs
    ///
    /// Repeated tokens have their counts added together.
    pub fn from_counts<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (token, count) in pairs {
            *table.counts.entry_ref(token.as_ref()).or_insert(0) += count;
            table.total += count;
        }
        table
    }

    /// Record one occurrence of `token`
    #[inline]
    pub fn record(&mut self, token: &str) {
        *self.counts.entry_ref(token).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for `token`, zero if unseen
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(token, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_tokens() {
        let table = FrequencyTable::from_tokens(["a", "b", "a", "c", "a"]);

        assert_eq!(table.get("a"), 3);
        assert_eq!(table.get("b"), 1);
        assert_eq!(table.get("z"), 0);
        assert_eq!(table.distinct(), 3);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_total_matches_sum_of_counts() {
        let words = "one two two three three three four four four four";
        let table: FrequencyTable = words.split_whitespace().collect();

        let sum: u64 = table.iter().map(|(_, count)| count).sum();
        assert_eq!(sum, table.total());
        assert_eq!(sum, words.split_whitespace().count() as u64);
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::from_tokens(Vec::<String>::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_from_counts_merges() {
        let table = FrequencyTable::from_counts([("a", 5), ("b", 3), ("a", 1)]);

        assert_eq!(table.get("a"), 6);
        assert_eq!(table.total(), 9);
        assert_eq!(table.distinct(), 2);
    }
}
