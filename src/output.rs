//! Report output
//!
//! Writes report entries, one `<token>: <count>` line each, through a
//! buffered writer.

use std::io::{self, BufWriter, Write};

use crate::report::{Report, ReportEntry};

/// Buffered report writer
pub struct ReportWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            lines_written: 0,
        }
    }

    /// Write a single entry
    pub fn write_entry(&mut self, entry: &ReportEntry) -> io::Result<()> {
        writeln!(self.writer, "{}", entry)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write all entries of `report` in order and flush
    pub fn write_report(&mut self, report: &Report) -> io::Result<()> {
        for entry in &report.entries {
            self.write_entry(entry)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }
}

/// Render a report to a string
pub fn render(report: &Report) -> String {
    let mut buf = Vec::new();
    {
        let mut writer = ReportWriter::new(&mut buf);
        writer
            .write_report(report)
            .expect("writing to a Vec does not fail");
    }
    String::from_utf8_lossy(&buf).into_owned()
}
