//! Configuration line grammars built on `bump_scan`.
//!
//! Filters describe their configuration in short lines such as
//!
//! ```text
//! /FROM alpine:([\d.]+)/ docker:alpine|^3
//! "release notes" https://example.org/notes
//! ```
//!
//! Each grammar here is a [`Sequencer`](bump_scan::Sequencer) of token
//! definitions; parsing scans the whole line and turns the captures into a
//! typed value.

mod error;
mod link;
mod pattern;

pub use error::LineError;
pub use link::{link_line_grammar, LinkLine};
pub use pattern::{pattern_line_grammar, PatternLine};
