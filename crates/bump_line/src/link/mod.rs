//! `title url` lines.
//!
//! The title is either a `"`-quoted literal or a single word.

use bump_scan::{
    scan, Alternation, CharClass, CharClassRun, QuotedLiteral, RestCapture, Sequencer, TokenDef,
};
use tracing::debug;

use crate::LineError;

const TITLE: &str = "title";
const URL: &str = "URL";

/// Grammar for a link line: `title` and `URL` captures.
pub fn link_line_grammar() -> Sequencer {
    let title = Alternation::default()
        .or(QuotedLiteral::new(b'"'))
        .or(CharClassRun::new(CharClass::WORD));
    Sequencer::new(vec![
        TokenDef::capture(TITLE, title),
        TokenDef::skip(CharClassRun::new(CharClass::WHITESPACE)),
        TokenDef::capture(URL, RestCapture::new(1)),
    ])
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LinkLine {
    pub title: String,
    pub url: String,
}

impl LinkLine {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(line: &str) -> Result<Self, LineError> {
        let mut grammar = link_line_grammar();
        let pos = scan(line, &mut grammar)?;
        debug!(pos, "link line scanned");

        let mut captures = grammar.into_captures();
        Ok(LinkLine {
            title: captures.take(TITLE).ok_or(LineError::MissingCapture(TITLE))?,
            url: captures.take(URL).ok_or(LineError::MissingCapture(URL))?,
        })
    }
}

#[cfg(test)]
mod tests;
