//! Argument handling.

use std::str::FromStr;

use bump_line::{link_line_grammar, pattern_line_grammar};
use bump_scan::Sequencer;

/// Which line grammar to scan with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Grammar {
    /// `/regex/ pipeline`
    Pattern,
    /// `title url`
    Link,
}

impl Grammar {
    /// A fresh grammar instance; one per scanned line.
    pub fn sequencer(self) -> Sequencer {
        match self {
            Grammar::Pattern => pattern_line_grammar(),
            Grammar::Link => link_line_grammar(),
        }
    }
}

impl FromStr for Grammar {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pattern" => Ok(Grammar::Pattern),
            "link" => Ok(Grammar::Link),
            other => Err(CliError::UnknownGrammar(other.to_owned())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing grammar")]
    MissingGrammar,
    #[error("unknown grammar `{0}` (expected `pattern` or `link`)")]
    UnknownGrammar(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Usage errors get the usage text printed after them.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::MissingGrammar | CliError::UnknownGrammar(_))
    }
}

/// Parsed command line: the grammar and the lines given as arguments (empty
/// means read stdin).
#[derive(Debug, Eq, PartialEq)]
pub struct Args<'a> {
    pub grammar: Grammar,
    pub lines: &'a [String],
}

pub fn parse_args(args: &[String]) -> Result<Args<'_>, CliError> {
    let Some((grammar, lines)) = args.split_first() else {
        return Err(CliError::MissingGrammar);
    };
    Ok(Args {
        grammar: grammar.parse()?,
        lines,
    })
}

pub fn print_usage() {
    eprintln!("Usage: bumpscan <grammar> [LINE...]");
    eprintln!();
    eprintln!("Grammars:");
    eprintln!("  pattern    /regex/ pipeline");
    eprintln!("  link       title url   (title is a word or \"quoted\")");
    eprintln!();
    eprintln!("Without LINE arguments, lines are read from stdin.");
    eprintln!("Set RUST_LOG=bump_scan=trace to trace scanning.");
}
