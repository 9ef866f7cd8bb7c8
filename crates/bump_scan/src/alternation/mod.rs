//! Ordered alternation by elimination.
//!
//! All live candidates see the same byte stream in lock-step. A candidate that
//! fails is dropped for good; the first candidate (in original order) to
//! complete wins. There is no backtracking: an eliminated branch never rejoins.

use smallvec::SmallVec;
use tracing::trace;

use crate::{ScanErrorKind, ScanStep, Step};

/// Runs candidate steps in parallel and returns the first to complete.
#[derive(Default)]
pub struct Alternation {
    /// Surviving candidates with their original index, in original order.
    live: SmallVec<[(usize, Box<dyn ScanStep>); 4]>,
    /// Index handed to the next candidate added with [`Alternation::or`].
    next_index: usize,
}

impl Alternation {
    pub fn new(candidates: impl IntoIterator<Item = Box<dyn ScanStep>>) -> Self {
        let live: SmallVec<_> = candidates.into_iter().enumerate().collect();
        Alternation {
            next_index: live.len(),
            live,
        }
    }

    /// Add a candidate after the existing ones.
    #[must_use]
    pub fn or(mut self, candidate: impl ScanStep + 'static) -> Self {
        self.live.push((self.next_index, Box::new(candidate)));
        self.next_index += 1;
        self
    }

    /// Number of candidates not yet eliminated.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl ScanStep for Alternation {
    fn advance(&mut self, byte: Option<u8>) -> Step {
        let mut i = 0;
        while i < self.live.len() {
            let (index, candidate) = &mut self.live[i];
            match candidate.advance(byte) {
                Step::Continue => i += 1,
                Step::Done(token) => {
                    trace!(candidate = *index, "alternative matched");
                    return Step::Done(token);
                }
                Step::Fail(kind) => {
                    trace!(candidate = *index, %kind, "alternative eliminated");
                    // Order-preserving removal keeps "first listed wins" intact.
                    self.live.remove(i);
                }
            }
        }

        if self.live.is_empty() {
            Step::Fail(ScanErrorKind::NoAlternativeMatched)
        } else {
            Step::Continue
        }
    }
}
