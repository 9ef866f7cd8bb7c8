//! Runs of bytes belonging to one [`CharClass`].

use crate::step::token_text;
use crate::{CharClass, ScanErrorKind, ScanStep, Step};

/// Accumulates consecutive bytes of a class.
///
/// The first byte must match. The first non-matching byte (or end of input)
/// completes the run and is left for the next step.
#[derive(Clone, Debug)]
pub struct CharClassRun {
    class: CharClass,
    buf: Vec<u8>,
}

impl CharClassRun {
    pub fn new(class: CharClass) -> Self {
        CharClassRun {
            class,
            buf: Vec::new(),
        }
    }
}

impl ScanStep for CharClassRun {
    fn advance(&mut self, byte: Option<u8>) -> Step {
        match byte {
            Some(b) if self.class.matches(b) => {
                self.buf.push(b);
                Step::Continue
            }
            _ if self.buf.is_empty() => Step::Fail(ScanErrorKind::ExpectedClass {
                class: self.class.name(),
            }),
            _ => Step::Done(token_text(std::mem::take(&mut self.buf))),
        }
    }
}
