//! Byte-at-a-time scan combinators for bump configuration lines.
//!
//! This crate is standalone (zero `bump_*` dependencies) so that filters and
//! tools can tokenize short configuration strings without pulling in the rest
//! of the bump machinery.
//!
//! # Architecture
//!
//! ```text
//! Scanner (input + cursor)
//!     │  one byte per call, `None` at end of input
//!     ▼
//! ScanStep::advance ──► Step::{Continue, Done(token), Fail(kind)}
//!     │
//!     ├── CharClassRun   bytes matching a CharClass
//!     ├── RestCapture    everything up to end of input
//!     ├── QuotedLiteral  `q ... q` with backslash escapes
//!     ├── Alternation    lock-step candidates, failed ones eliminated
//!     └── Sequencer      named TokenDefs one after another, returns Captures
//! ```
//!
//! A `Done` never consumes the byte it was offered: that byte is lookahead and
//! is offered again to whatever step runs next. There is no backtracking and no
//! recursion; every step is a small state machine driven exactly once.
//!
//! # Example
//!
//! ```
//! use bump_scan::{scan, CharClass, CharClassRun, QuotedLiteral, RestCapture, Sequencer, TokenDef};
//!
//! let mut line = Sequencer::new(vec![
//!     TokenDef::capture("re", QuotedLiteral::new(b'/')),
//!     TokenDef::skip(CharClassRun::new(CharClass::WHITESPACE)),
//!     TokenDef::capture("pipeline", RestCapture::new(1)),
//! ]);
//! let pos = scan("/name: (1)/ static:2", &mut line).unwrap();
//! assert_eq!(pos, 20);
//!
//! let captures = line.into_captures();
//! assert_eq!(captures.get("re"), Some("name: (1)"));
//! assert_eq!(captures.get("pipeline"), Some("static:2"));
//! ```
//!
//! # Byte granularity
//!
//! Input is consumed one byte at a time, not one `char` at a time. Multi-byte
//! UTF-8 sequences pass through unchanged as long as every delimiter and class
//! boundary in the grammar is ASCII.

mod alternation;
mod class;
mod error;
mod quoted;
mod rest;
mod run;
mod scanner;
mod sequencer;
mod step;

pub use alternation::Alternation;
pub use class::CharClass;
pub use error::{ScanError, ScanErrorKind};
pub use quoted::{escape_quoted, QuotedLiteral};
pub use rest::RestCapture;
pub use run::CharClassRun;
pub use scanner::{scan, Scanner, MAX_PENDING_SENTINELS};
pub use sequencer::{Captures, Sequencer, TokenDef};
pub use step::{ScanStep, Step};
