//! Ordered sequences of token definitions.
//!
//! A [`Sequencer`] drives its [`TokenDef`]s one after another. Each completed
//! sub-token is reported as `Done` so the driver re-offers the lookahead byte to
//! the next definition; the sequencer itself only closes when end of input
//! arrives after the last definition.

use tracing::trace;

use crate::{ScanErrorKind, ScanStep, Step};

/// One element of a [`Sequencer`]: a step plus how its token is reported.
pub struct TokenDef {
    name: Option<&'static str>,
    capture: bool,
    step: Box<dyn ScanStep>,
}

impl TokenDef {
    /// A named token whose value is stored in the [`Captures`].
    pub fn capture(name: &'static str, step: impl ScanStep + 'static) -> Self {
        TokenDef {
            name: Some(name),
            capture: true,
            step: Box::new(step),
        }
    }

    /// A named token that is not stored; the name only labels errors.
    pub fn named(name: &'static str, step: impl ScanStep + 'static) -> Self {
        TokenDef {
            name: Some(name),
            capture: false,
            step: Box::new(step),
        }
    }

    /// An anonymous token, e.g. a separator.
    pub fn skip(step: impl ScanStep + 'static) -> Self {
        TokenDef {
            name: None,
            capture: false,
            step: Box::new(step),
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

/// Captured token values, in the order they were scanned.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Captures {
    entries: Vec<(&'static str, String)>,
}

impl Captures {
    /// Store `value` under `name`, replacing an earlier value in place.
    fn insert(&mut self, name: &'static str, value: String) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove and return the value captured under `name`.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| *n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }
}

impl IntoIterator for Captures {
    type Item = (&'static str, String);
    type IntoIter = std::vec::IntoIter<(&'static str, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Runs token definitions in order and collects their captures.
pub struct Sequencer {
    defs: Vec<TokenDef>,
    /// Index of the definition currently being fed. `defs.len()` once all
    /// definitions completed.
    index: usize,
    captures: Captures,
    closed: bool,
}

impl Sequencer {
    pub fn new(defs: Vec<TokenDef>) -> Self {
        Sequencer {
            defs,
            index: 0,
            captures: Captures::default(),
            closed: false,
        }
    }

    /// Number of definitions that have completed.
    pub fn progress(&self) -> usize {
        self.index
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn into_captures(self) -> Captures {
        self.captures
    }
}

impl ScanStep for Sequencer {
    fn advance(&mut self, byte: Option<u8>) -> Step {
        let Some(def) = self.defs.get_mut(self.index) else {
            return match byte {
                None => {
                    self.closed = true;
                    Step::Done(String::new())
                }
                Some(found) => Step::Fail(ScanErrorKind::UnexpectedTrailingInput { found }),
            };
        };

        match def.step.advance(byte) {
            Step::Continue => Step::Continue,
            Step::Fail(kind) => Step::Fail(match def.name {
                Some(name) => kind.named(name),
                None => kind,
            }),
            Step::Done(token) => {
                trace!(index = self.index, name = def.name, "token definition complete");
                if let (true, Some(name)) = (def.capture, def.name) {
                    self.captures.insert(name, token.clone());
                }
                self.index += 1;
                Step::Done(token)
            }
        }
    }

    fn is_open(&self) -> bool {
        !self.closed
    }
}
