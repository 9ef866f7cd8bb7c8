//! `/regex/ pipeline` lines.
//!
//! The regex is a `/`-quoted literal (`\/` for a literal slash, other escapes
//! kept verbatim for the regex engine), followed by whitespace and a non-empty
//! filter pipeline that runs to the end of the line.

use bump_scan::{
    escape_quoted, scan, CharClass, CharClassRun, QuotedLiteral, RestCapture, Sequencer, TokenDef,
};
use tracing::debug;

use crate::LineError;

const RE: &str = "re";
const PIPELINE: &str = "pipeline";

/// Grammar for a pattern line: `re` and `pipeline` captures.
pub fn pattern_line_grammar() -> Sequencer {
    Sequencer::new(vec![
        TokenDef::capture(RE, QuotedLiteral::new(b'/')),
        TokenDef::skip(CharClassRun::new(CharClass::WHITESPACE)),
        TokenDef::capture(PIPELINE, RestCapture::new(1)),
    ])
}

/// A parsed `/regex/ pipeline` line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PatternLine {
    /// Regex source with `\/` unescaped.
    pub pattern: String,
    /// Filter pipeline text, verbatim.
    pub pipeline: String,
}

impl PatternLine {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(line: &str) -> Result<Self, LineError> {
        let mut grammar = pattern_line_grammar();
        let pos = scan(line, &mut grammar)?;
        debug!(pos, "pattern line scanned");

        let mut captures = grammar.into_captures();
        Ok(PatternLine {
            pattern: captures.take(RE).ok_or(LineError::MissingCapture(RE))?,
            pipeline: captures
                .take(PIPELINE)
                .ok_or(LineError::MissingCapture(PIPELINE))?,
        })
    }

    /// Render back to line form, or `None` if the pattern has no quoted form.
    pub fn to_line(&self) -> Option<String> {
        let pattern = escape_quoted(&self.pattern, b'/')?;
        Some(format!("/{pattern}/ {}", self.pipeline))
    }
}
