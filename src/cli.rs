//! Command-line interface definition for word-freq
//!
//! Provides argument parsing for the word frequency counter. Values are
//! validated when they are turned into a `CountConfig`.

use clap::Parser;
use std::path::PathBuf;

/// Count word occurrences in a text file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "word-freq",
    version,
    about = "Count word occurrences in a text file",
    long_about = r#"
Count word occurrences in a text file and print one "<word>: <count>" line per
word, most frequent first. Words with equal counts are listed alphabetically.

By default words are case-folded, and apostrophes or hyphens inside a word
keep it whole ("don't", "well-known").

EXAMPLES:
    # Every word in the file
    word-freq notes.txt

    # Ten most frequent words, skipping common English words
    word-freq notes.txt --top 10 --ignore-common

    # Words seen at least 5 times, keeping case
    word-freq notes.txt --min-count 5 --case-sensitive

    # Latin-1 input, with a summary on stderr
    word-freq legacy.txt --encoding latin1 --stats

When both --top and --min-count are given, --min-count filters first and
--top then keeps the first N of what remains.
"#
)]
pub struct Args {
    /// Input text file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Treat words as case sensitive
    #[arg(short, long, default_value_t = false)]
    pub case_sensitive: bool,

    /// Ignore common words (the, and, etc.)
    #[arg(short, long, default_value_t = false)]
    pub ignore_common: bool,

    /// Show only the N most frequent words
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Show only words with at least N occurrences
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub min_count: Option<i64>,

    /// Split words at apostrophes ("don't" becomes "don" and "t")
    #[arg(long, default_value_t = false)]
    pub split_apostrophes: bool,

    /// Split words at hyphens ("well-known" becomes "well" and "known")
    #[arg(long, default_value_t = false)]
    pub split_hyphens: bool,

    /// Input encoding: utf8, auto, or a label such as latin1 or shift_jis
    #[arg(short, long, value_name = "LABEL", default_value = "utf8")]
    pub encoding: String,

    /// Print a summary to stderr after the report
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - only warnings and errors are logged
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Log level implied by --quiet / --verbose
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
