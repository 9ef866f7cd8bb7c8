//! Capture of everything up to end of input.

use crate::step::token_text;
use crate::{ScanErrorKind, ScanStep, Step};

/// Accumulates every remaining byte, requiring at least `min` of them.
#[derive(Clone, Debug)]
pub struct RestCapture {
    min: usize,
    buf: Vec<u8>,
}

impl RestCapture {
    pub fn new(min: usize) -> Self {
        RestCapture {
            min,
            buf: Vec::new(),
        }
    }
}

impl ScanStep for RestCapture {
    fn advance(&mut self, byte: Option<u8>) -> Step {
        let Some(b) = byte else {
            if self.buf.len() < self.min {
                return Step::Fail(ScanErrorKind::InsufficientLength {
                    min: self.min,
                    found: self.buf.len(),
                });
            }
            return Step::Done(token_text(std::mem::take(&mut self.buf)));
        };
        self.buf.push(b);
        Step::Continue
    }
}

#[cfg(test)]
mod tests;
