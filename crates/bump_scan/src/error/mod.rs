//! Scan errors.
//!
//! Every error is terminal: the first failure anywhere aborts the scan and no
//! partial token set is returned. Steps report a bare [`ScanErrorKind`]; the
//! [`Scanner`](crate::Scanner) attaches the byte offset that triggered it.

use std::fmt;

/// A byte as it appears in messages: printable ASCII verbatim, anything else
/// escaped.
struct ShowByte<'a>(&'a u8);

impl fmt::Display for ShowByte<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() {
            write!(f, "{}", char::from(*self.0))
        } else {
            write!(f, "{}", self.0.escape_ascii())
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ScanErrorKind {
    /// The first byte of a class run did not satisfy the class.
    #[error("expected {class}")]
    ExpectedClass { class: &'static str },
    /// A quoted literal did not start with its quote.
    #[error("expected {}", ShowByte(.quote))]
    ExpectedDelimiter { quote: u8 },
    /// End of input before the closing quote.
    #[error("found no ending {}", ShowByte(.quote))]
    UnterminatedLiteral { quote: u8 },
    /// A rest capture ended with fewer bytes than its minimum.
    #[error("expected more characters (at least {min}, found {found})")]
    InsufficientLength { min: usize, found: usize },
    /// Every alternative failed.
    #[error("no match")]
    NoAlternativeMatched,
    /// Input left over after a sequence was satisfied.
    #[error("unexpected {}", ShowByte(.found))]
    UnexpectedTrailingInput { found: u8 },
    /// The top-level step was still waiting for input at end of input.
    #[error("unexpected end of input")]
    IncompleteInput,
    /// A failure inside a named token definition.
    #[error("{name}: {source}")]
    Named {
        name: &'static str,
        source: Box<ScanErrorKind>,
    },
}

impl ScanErrorKind {
    /// Wrap this kind with the name of the token that failed.
    #[must_use]
    pub fn named(self, name: &'static str) -> Self {
        ScanErrorKind::Named {
            name,
            source: Box::new(self),
        }
    }

    /// The innermost kind, with every `Named` layer removed.
    pub fn root(&self) -> &ScanErrorKind {
        let mut kind = self;
        while let ScanErrorKind::Named { source, .. } = kind {
            kind = source;
        }
        kind
    }
}

/// A scan failure at a byte offset.
///
/// `pos` is the cursor of the byte whose offering produced the failure, or the
/// input length when the end-of-input sentinel did.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ScanError {
    /// WHERE the scan stopped.
    pub pos: usize,
    /// WHAT went wrong.
    pub kind: ScanErrorKind,
}

impl ScanError {
    pub fn new(pos: usize, kind: ScanErrorKind) -> Self {
        ScanError { pos, kind }
    }

    /// The innermost kind, ignoring token names.
    pub fn root(&self) -> &ScanErrorKind {
        self.kind.root()
    }

    /// Name of the outermost named token that failed, if any.
    pub fn token_name(&self) -> Option<&'static str> {
        match &self.kind {
            ScanErrorKind::Named { name, .. } => Some(*name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
