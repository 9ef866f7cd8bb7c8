//! Rendering scan errors against the scanned line.

use std::io::Write;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use bump_scan::ScanError;

const SOURCE_ID: &str = "line";

/// Convert a byte offset into the char offset ariadne labels use.
fn char_offset(line: &str, byte_pos: usize) -> usize {
    line.char_indices()
        .take_while(|&(i, _)| i < byte_pos)
        .count()
}

/// Write a report pointing at the byte where scanning stopped.
///
/// End-of-input failures point at the last char of the line; an empty line
/// gets the message alone.
pub fn write_scan_error<W: Write>(
    line: &str,
    err: &ScanError,
    color: bool,
    out: W,
) -> std::io::Result<()> {
    let char_len = line.chars().count();
    let at_end = err.pos >= line.len();
    let start = char_offset(line, err.pos).min(char_len.saturating_sub(1));

    let mut report = Report::build(ReportKind::Error, SOURCE_ID, start)
        .with_config(Config::default().with_color(color))
        .with_message(err.to_string());
    if char_len > 0 {
        let message = if at_end {
            "input ends here"
        } else {
            "scanning stopped here"
        };
        report = report.with_label(
            Label::new((SOURCE_ID, start..start + 1))
                .with_message(message)
                .with_color(Color::Red),
        );
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(line)), out)
}
