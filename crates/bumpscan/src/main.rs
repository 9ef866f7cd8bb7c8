//! bumpscan: tokenize bump configuration lines.
//!
//! Prints the captures of every line that matches the chosen grammar as
//! `name=value` lines, and a report for every line that does not. Exits with a
//! failure status if any line failed.

mod cli;
mod report;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use bump_scan::scan;
use tracing::debug;

use cli::{parse_args, print_usage, CliError, Grammar};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) if err.is_usage() => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Route `bump_scan`, `bump_line` and `bumpscan` events to stderr as a tree.
///
/// Off unless `RUST_LOG` holds a valid filter, e.g. `RUST_LOG=bump_scan=trace`
/// to see every token and alternative, or `RUST_LOG=bumpscan=debug` for one
/// event per line. Stdout carries only captures either way.
fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return;
    };
    tracing_subscriber::registry()
        .with(
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

/// Returns whether every line scanned successfully.
fn run(args: &[String]) -> Result<bool, CliError> {
    let args = parse_args(args)?;
    let color = io::stderr().is_terminal();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let mut all_ok = true;
    if args.lines.is_empty() {
        for line in io::stdin().lock().lines() {
            all_ok &= scan_line(args.grammar, &line?, color, &mut out, &mut err)?;
        }
    } else {
        for line in args.lines {
            all_ok &= scan_line(args.grammar, line, color, &mut out, &mut err)?;
        }
    }
    Ok(all_ok)
}

fn scan_line(
    grammar: Grammar,
    line: &str,
    color: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut seq = grammar.sequencer();
    match scan(line, &mut seq) {
        Ok(pos) => {
            debug!(pos, "line scanned");
            for (name, value) in seq.captures().iter() {
                writeln!(out, "{name}={value}")?;
            }
            Ok(true)
        }
        Err(scan_err) => {
            report::write_scan_error(line, &scan_err, color, &mut *err)?;
            Ok(false)
        }
    }
}
