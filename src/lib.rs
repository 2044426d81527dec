//! # word-freq
//!
//! Counts word occurrences in a text file and reports them ranked by
//! frequency.
//!
//! ## Features
//!
//! - **Tokenizing**: Unicode letter/digit runs, with optional joining across
//!   apostrophes and hyphens
//! - **Case folding**: Case-insensitive counting by default
//! - **Stop words**: Optional removal of common English words
//! - **Ranking**: Descending count, ties broken alphabetically, with top-N and
//!   minimum-count selection
//! - **Encodings**: Strict UTF-8 by default, BOM sniffing and detection on request
//!
//! ## Usage
//!
//! ```bash
//! # Ten most frequent words, skipping common words
//! word-freq book.txt --top 10 --ignore-common
//!
//! # Words seen at least 3 times
//! word-freq book.txt --min-count 3
//! ```
//!
//! ## Example
//!
//! ```rust
//! use word_freq::processor::{CountConfig, WordCounter};
//! use word_freq::report::ReportConfig;
//!
//! let config = CountConfig {
//!     report: ReportConfig::new(Some(2), None).unwrap(),
//!     ..CountConfig::default()
//! };
//!
//! let counter = WordCounter::new(config);
//! let report = counter.report_text("b a b c a b");
//!
//! assert_eq!(word_freq::output::render(&report), "b: 3\na: 2\n");
//! ```

pub mod cli;
pub mod counter;
pub mod display;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod processor;
pub mod report;
pub mod stopwords;
pub mod tokenizer;

pub use cli::Args;
pub use error::{Result, WordFreqError};
pub use processor::{CountConfig, WordCounter};
