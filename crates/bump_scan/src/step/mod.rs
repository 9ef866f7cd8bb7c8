//! The scan step contract.
//!
//! A step is fed one byte per call (`None` once the input is exhausted) and
//! answers with a [`Step`]. Steps own their accumulation state and are driven
//! by exactly one scan session.

use crate::ScanErrorKind;

/// Outcome of offering one byte to a [`ScanStep`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Step {
    /// The byte was taken; no token yet.
    Continue,
    /// A token is complete. The offered byte was NOT consumed.
    Done(String),
    /// The step cannot match.
    Fail(ScanErrorKind),
}

/// A stateful scanner that advances by one byte per call.
///
/// # Contract
///
/// - `byte` is `None` at end of input. The sentinel is offered again on every
///   call until the step resolves.
/// - After `Done` or `Fail` a step is finished and must not be advanced again,
///   unless [`is_open`](Self::is_open) reports that it has more tokens to give.
pub trait ScanStep {
    /// Offer the next byte (or the end-of-input sentinel).
    fn advance(&mut self, byte: Option<u8>) -> Step;

    /// Whether the step keeps going after reporting `Done`.
    ///
    /// Only composite steps that emit several sub-tokens (the
    /// [`Sequencer`](crate::Sequencer)) stay open.
    fn is_open(&self) -> bool {
        false
    }
}

impl<S: ScanStep + ?Sized> ScanStep for Box<S> {
    #[inline]
    fn advance(&mut self, byte: Option<u8>) -> Step {
        (**self).advance(byte)
    }

    #[inline]
    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

/// Turn accumulated bytes into token text.
///
/// Lossless whenever the token boundaries fall on ASCII bytes, which holds for
/// every grammar built from ASCII delimiters and classes.
pub(crate) fn token_text(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
