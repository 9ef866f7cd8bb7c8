//! The scan driver.
//!
//! Owns the input and a byte cursor and feeds the byte under the cursor to a
//! top-level [`ScanStep`]. The cursor only moves on `Continue`: a `Done` leaves
//! the byte that triggered it in place so the next sub-token sees it first.
//! Once the cursor reaches the end, the `None` sentinel is offered on every
//! iteration until the step resolves, up to [`MAX_PENDING_SENTINELS`] offers
//! answered with `Continue`.

use tracing::{debug, trace};

use crate::{ScanError, ScanErrorKind, ScanStep, Step};

/// How many times a step may answer the end-of-input sentinel with `Continue`
/// before the scan fails with [`ScanErrorKind::IncompleteInput`].
pub const MAX_PENDING_SENTINELS: usize = 64;

/// Input plus cursor for one scan session.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a> {
    input: &'a [u8],
    /// Byte offset of the next byte to offer. Never decreases.
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    /// Current cursor (byte offset).
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// True once every input byte has been offered.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The byte under the cursor, or `None` at end of input.
    #[inline]
    fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Drive `step` until it completes or fails.
    ///
    /// Returns the final cursor. For a [`Sequencer`](crate::Sequencer) that is
    /// the input length; a single non-composite step stops on its lookahead
    /// byte. On failure the error carries the cursor of the offending byte.
    pub fn run<S: ScanStep + ?Sized>(&mut self, step: &mut S) -> Result<usize, ScanError> {
        let mut pending = 0;
        loop {
            let byte = self.current();
            match step.advance(byte) {
                Step::Continue if self.is_eof() => {
                    pending += 1;
                    trace!(pos = self.pos, pending, "step pending at end of input");
                    if pending >= MAX_PENDING_SENTINELS {
                        debug!(pos = self.pos, "step never resolved at end of input");
                        return Err(ScanError::new(self.pos, ScanErrorKind::IncompleteInput));
                    }
                }
                Step::Continue => self.pos += 1,
                Step::Done(token) => {
                    trace!(
                        start = self.pos.saturating_sub(token.len()),
                        end = self.pos,
                        token = %token,
                        "token"
                    );
                    if !step.is_open() {
                        debug!(pos = self.pos, "scan complete");
                        return Ok(self.pos);
                    }
                }
                Step::Fail(kind) => {
                    debug!(pos = self.pos, error = %kind, "scan failed");
                    return Err(ScanError::new(self.pos, kind));
                }
            }
        }
    }
}

/// Scan `input` with `step` from the start.
///
/// Convenience for `Scanner::new(input).run(step)`.
pub fn scan<S: ScanStep + ?Sized>(input: &str, step: &mut S) -> Result<usize, ScanError> {
    Scanner::new(input).run(step)
}
