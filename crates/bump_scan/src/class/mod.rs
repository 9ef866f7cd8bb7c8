//! Named byte classes for [`CharClassRun`](crate::CharClassRun).
//!
//! A class is immutable configuration: build it once (the built-ins are
//! `const`) and share it freely between grammars.

use std::fmt;

/// A named predicate over single bytes.
///
/// The name is what error messages show (`expected <name>`).
#[derive(Clone, Copy, Debug)]
pub struct CharClass {
    name: &'static str,
    kind: ClassKind,
}

#[derive(Clone, Copy, Debug)]
enum ClassKind {
    Whitespace,
    Word,
    Digit,
    Alphabetic,
    Alphanumeric,
    OneOf(&'static [u8]),
    NoneOf(&'static [u8]),
    Custom(fn(u8) -> bool),
}

impl CharClass {
    /// `\s`: space, `\t`, `\n`, `\r` and form feed.
    pub const WHITESPACE: Self = Self::builtin("whitespace", ClassKind::Whitespace);
    /// `\w`: `[0-9A-Za-z_]`.
    pub const WORD: Self = Self::builtin("word character", ClassKind::Word);
    /// `[0-9]`.
    pub const DIGIT: Self = Self::builtin("digit", ClassKind::Digit);
    /// `[A-Za-z]`.
    pub const ALPHABETIC: Self = Self::builtin("letter", ClassKind::Alphabetic);
    /// `[0-9A-Za-z]`.
    pub const ALPHANUMERIC: Self = Self::builtin("letter or digit", ClassKind::Alphanumeric);

    const fn builtin(name: &'static str, kind: ClassKind) -> Self {
        Self { name, kind }
    }

    /// Any byte in `bytes`.
    pub const fn one_of(name: &'static str, bytes: &'static [u8]) -> Self {
        Self {
            name,
            kind: ClassKind::OneOf(bytes),
        }
    }

    /// Any byte NOT in `bytes`.
    pub const fn none_of(name: &'static str, bytes: &'static [u8]) -> Self {
        Self {
            name,
            kind: ClassKind::NoneOf(bytes),
        }
    }

    /// Any byte accepted by `pred`.
    pub const fn custom(name: &'static str, pred: fn(u8) -> bool) -> Self {
        Self {
            name,
            kind: ClassKind::Custom(pred),
        }
    }

    /// The name shown in error messages.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Does `byte` belong to this class?
    #[inline]
    pub fn matches(&self, byte: u8) -> bool {
        match self.kind {
            // Same set as `\s` in RE2: vertical tab is excluded.
            ClassKind::Whitespace => byte.is_ascii_whitespace(),
            ClassKind::Word => byte.is_ascii_alphanumeric() || byte == b'_',
            ClassKind::Digit => byte.is_ascii_digit(),
            ClassKind::Alphabetic => byte.is_ascii_alphabetic(),
            ClassKind::Alphanumeric => byte.is_ascii_alphanumeric(),
            ClassKind::OneOf(bytes) => bytes.contains(&byte),
            ClassKind::NoneOf(bytes) => !bytes.contains(&byte),
            ClassKind::Custom(pred) => pred(byte),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
