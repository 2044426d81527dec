//! Console display helpers
//!
//! Styled diagnostics and the optional run summary. Everything here goes to
//! stderr so stdout carries only the report.

use colored::*;
use std::path::Path;

use crate::processor::CountConfig;
use crate::report::Report;

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print the settings a run used
pub fn print_settings(path: &Path, config: &CountConfig) {
    print_header("Settings");
    print_info(&format!("File:                {:?}", path));
    print_info(&format!("Encoding:            {}", config.encoding.name()));
    print_info(&format!("Case sensitive:      {}", config.filter.case_sensitive));
    print_info(&format!("Ignore common words: {}", config.filter.ignore_common_words));
    print_info(&format!(
        "Join apostrophes:    {}",
        config.tokenizer.join_apostrophes
    ));
    print_info(&format!("Join hyphens:        {}", config.tokenizer.join_hyphens));

    if let Some(n) = config.report.top_n() {
        print_info(&format!("Top:                 {}", n));
    }
    if let Some(n) = config.report.min_count() {
        print_info(&format!("Min count:           {}", n));
    }
}

/// Print totals for a finished report
pub fn print_summary(report: &Report, config: &CountConfig) {
    print_header("Summary");

    if report.total_occurrences == 0 {
        print_warning("No words found");
    } else if report.is_empty() {
        let min = config.report.min_count().unwrap_or(1);
        print_warning(&format!("No words found with at least {} occurrence(s)", min));
    }

    print_info(&format!("Words shown:            {}", format_number(report.len() as u64)));
    print_info(&format!(
        "Total unique words:     {}",
        format_number(report.distinct_tokens as u64)
    ));
    print_info(&format!(
        "Total word occurrences: {}",
        format_number(report.total_occurrences)
    ));
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
