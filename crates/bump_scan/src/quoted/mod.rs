//! Quote-delimited literals with backslash escapes.
//!
//! # States
//!
//! ```text
//! Start ──q──► InQuote ──q──► End ──any──► Done
//!                │  ▲
//!               '\' │ any
//!                ▼  │
//!               Escape
//! ```
//!
//! Completion is reported on the byte AFTER the closing quote (or on end of
//! input), and that byte is not consumed. An escaped quote (`\q`) yields a bare
//! `q`; any other escape keeps both bytes, so `\d` in a `/.../` regex survives
//! untouched.

use crate::step::token_text;
use crate::{ScanErrorKind, ScanStep, Step};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum QuoteState {
    Start,
    InQuote,
    Escape,
    End,
}

/// A literal delimited by `quote` on both sides.
///
/// A backslash quote never terminates (the backslash always escapes), so use a
/// different delimiter.
#[derive(Clone, Debug)]
pub struct QuotedLiteral {
    quote: u8,
    state: QuoteState,
    buf: Vec<u8>,
}

impl QuotedLiteral {
    pub fn new(quote: u8) -> Self {
        QuotedLiteral {
            quote,
            state: QuoteState::Start,
            buf: Vec::new(),
        }
    }
}

impl ScanStep for QuotedLiteral {
    fn advance(&mut self, byte: Option<u8>) -> Step {
        let Some(b) = byte else {
            if self.state == QuoteState::End {
                return Step::Done(token_text(std::mem::take(&mut self.buf)));
            }
            return Step::Fail(ScanErrorKind::UnterminatedLiteral { quote: self.quote });
        };

        match self.state {
            QuoteState::Start => {
                if b != self.quote {
                    return Step::Fail(ScanErrorKind::ExpectedDelimiter { quote: self.quote });
                }
                self.state = QuoteState::InQuote;
            }
            QuoteState::InQuote => {
                if b == b'\\' {
                    self.state = QuoteState::Escape;
                } else if b == self.quote {
                    self.state = QuoteState::End;
                } else {
                    self.buf.push(b);
                }
            }
            QuoteState::Escape => {
                if b != self.quote {
                    self.buf.push(b'\\');
                }
                self.buf.push(b);
                self.state = QuoteState::InQuote;
            }
            QuoteState::End => return Step::Done(token_text(std::mem::take(&mut self.buf))),
        }
        Step::Continue
    }
}

/// Writer form of `content` for a [`QuotedLiteral`] with delimiter `quote`,
/// without the surrounding quotes.
///
/// Returns `None` when `content` cannot be read back: a backslash that ends the
/// content or that is followed by `quote`, or a backslash or non-ASCII `quote`.
pub fn escape_quoted(content: &str, quote: u8) -> Option<String> {
    if quote == b'\\' || !quote.is_ascii() {
        return None;
    }

    let mut out = String::with_capacity(content.len() + 2);
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == char::from(quote) {
            out.push('\\');
            out.push(c);
        } else if c == '\\' {
            // The reader keeps `\x` verbatim unless `x` is the quote.
            let next = chars.next()?;
            if next == char::from(quote) {
                return None;
            }
            out.push(c);
            out.push(next);
        } else {
            out.push(c);
        }
    }
    Some(out)
}
