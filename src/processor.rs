//! Core processing pipeline
//!
//! Load, tokenize, normalize, count, and rank. Everything runs on the
//! calling thread in a single pass over the text.

use std::path::Path;

use crate::cli::Args;
use crate::counter::FrequencyTable;
use crate::encoding::TextEncoding;
use crate::error::Result;
use crate::filter::{FilterConfig, Normalizer};
use crate::loader::load_text;
use crate::report::{build_report, Report, ReportConfig};
use crate::stopwords::StopWords;
use crate::tokenizer::{Tokenizer, TokenizerConfig};

/// Validated configuration for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountConfig {
    pub tokenizer: TokenizerConfig,
    pub filter: FilterConfig,
    pub report: ReportConfig,
    pub encoding: TextEncoding,
}

impl CountConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            tokenizer: TokenizerConfig {
                join_apostrophes: !args.split_apostrophes,
                join_hyphens: !args.split_hyphens,
            },
            filter: FilterConfig {
                case_sensitive: args.case_sensitive,
                ignore_common_words: args.ignore_common,
            },
            report: ReportConfig::new(args.top, args.min_count)?,
            encoding: args.encoding.parse()?,
        })
    }
}

/// Word counting pipeline
pub struct WordCounter {
    config: CountConfig,
    tokenizer: Tokenizer,
    stop_words: StopWords,
}

impl WordCounter {
    /// Create a counter using the built-in stop-word list
    pub fn new(config: CountConfig) -> Self {
        Self::with_stop_words(config, StopWords::builtin())
    }

    pub fn with_stop_words(config: CountConfig, stop_words: StopWords) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.tokenizer),
            config,
            stop_words,
        }
    }

    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// Build the frequency table for `text`
    pub fn count_text(&self, text: &str) -> FrequencyTable {
        let normalizer = Normalizer::new(self.config.filter, &self.stop_words);

        let mut seen = 0u64;
        let table = FrequencyTable::from_tokens(
            self.tokenizer
                .tokens(text)
                .inspect(|_| seen += 1)
                .filter_map(|token| normalizer.apply(token)),
        );

        log::debug!(
            "Tokenized {} words, {} kept after filtering ({} distinct)",
            seen,
            table.total(),
            table.distinct()
        );

        table
    }

    /// Count and rank the words of `text`
    pub fn report_text(&self, text: &str) -> Report {
        let table = self.count_text(text);
        build_report(&table, &self.config.report)
    }

    /// Count and rank the words of the file at `path`
    pub fn process(&self, path: &Path) -> Result<Report> {
        log::info!("Analyzing file: {:?}", path);

        let decoded = load_text(path, self.config.encoding)?;
        let report = self.report_text(&decoded.text);

        log::info!(
            "Counted {} words ({} distinct), reporting {}",
            report.total_occurrences,
            report.distinct_tokens,
            report.len()
        );

        Ok(report)
    }
}
