//! word-freq - count word occurrences in a text file
//!
//! Main entry point for the command-line application.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::process;

use word_freq::cli::Args;
use word_freq::display::{print_error, print_settings, print_summary};
use word_freq::output::ReportWriter;
use word_freq::processor::{CountConfig, WordCounter};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; RUST_LOG still wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = CountConfig::from_args(&args).context("invalid configuration")?;

    if args.stats {
        print_settings(&args.input, &config);
    }

    let counter = WordCounter::new(config);
    let report = counter
        .process(&args.input)
        .with_context(|| format!("failed to process {:?}", args.input))?;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    match writer.write_report(&report) {
        Ok(()) => {}
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed after {} report lines", writer.lines_written());
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to write report"),
    }
    log::debug!("Wrote {} report lines", writer.lines_written());

    if args.stats {
        print_summary(&report, counter.config());
    }

    Ok(())
}
