//! Ranked reporting
//!
//! Orders the frequency table by descending count, breaking ties by token,
//! then applies the minimum-count filter and the top-N cut, in that order.

use std::cmp::Ordering;
use std::fmt;
use std::num::{NonZeroU64, NonZeroUsize};

use crate::counter::FrequencyTable;
use crate::error::{Result, WordFreqError};

/// Validated reporting options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportConfig {
    top_n: Option<NonZeroUsize>,
    min_count: Option<NonZeroU64>,
}

impl ReportConfig {
    /// Validate raw option values
    ///
    /// Both values must be positive when given.
    pub fn new(top_n: Option<i64>, min_count: Option<i64>) -> Result<Self> {
        let top_n = top_n
            .map(|n| {
                usize::try_from(n)
                    .ok()
                    .and_then(NonZeroUsize::new)
                    .ok_or_else(|| invalid("top", n))
            })
            .transpose()?;

        let min_count = min_count
            .map(|n| {
                u64::try_from(n)
                    .ok()
                    .and_then(NonZeroU64::new)
                    .ok_or_else(|| invalid("min-count", n))
            })
            .transpose()?;

        Ok(Self { top_n, min_count })
    }

    pub fn top_n(&self) -> Option<usize> {
        self.top_n.map(NonZeroUsize::get)
    }

    pub fn min_count(&self) -> Option<u64> {
        self.min_count.map(NonZeroU64::get)
    }
}

fn invalid(option: &'static str, value: i64) -> WordFreqError {
    WordFreqError::InvalidOption {
        option,
        value: value.to_string(),
        reason: "must be a positive integer",
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub token: String,
    pub count: u64,
}

impl ReportEntry {
    pub fn new(token: impl Into<String>, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.count)
    }
}

/// Descending count, then ascending token
fn rank_order(a: &ReportEntry, b: &ReportEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token))
}

/// A ranked report together with totals of the table it came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    /// Distinct tokens in the source table
    pub distinct_tokens: usize,
    /// Total occurrences in the source table
    pub total_occurrences: u64,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Produce the ranked entries for `table`
pub fn rank(table: &FrequencyTable, config: &ReportConfig) -> Vec<ReportEntry> {
    let min_count = config.min_count().unwrap_or(1);

    let mut entries: Vec<ReportEntry> = table
        .iter()
        .filter(|&(_, count)| count >= min_count)
        .map(|(token, count)| ReportEntry::new(token, count))
        .collect();

    entries.sort_unstable_by(rank_order);

    if let Some(n) = config.top_n() {
        entries.truncate(n);
    }

    entries
}

/// Build a full report for `table`
pub fn build_report(table: &FrequencyTable, config: &ReportConfig) -> Report {
    Report {
        entries: rank(table, config),
        distinct_tokens: table.distinct(),
        total_occurrences: table.total(),
    }
}
