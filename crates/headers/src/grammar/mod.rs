//! A small ordered-choice grammar engine with exact-span captures.
//!
//! The engine is split into a few pieces:
//!
//! - [`Grammar`] and its combinators (`lit`, `stri`, `seq`, `choice`, ...) describe
//!   what to match
//! - the engine walks a grammar over an input and yields a [`Match`] or a
//!   [`MatchFailure`]
//! - [`Capture`] nodes record tagged byte spans of the input, so matched text is
//!   always echoed back verbatim
//! - the `uri` and `date` sub-grammars are shared building blocks used by the header
//!   rules
//!
//! # Matching rules
//!
//! - Alternation is ordered: the first alternative that matches wins, and it is never
//!   revisited when something after it fails
//! - Repetition is greedy
//! - [`Grammar::parse`] must consume the whole input, [`Grammar::parse_prefix`] may
//!   stop early
//! - Case-insensitive literals compare ASCII case-insensitively but the captured text
//!   keeps the input casing

mod capture;
pub(crate) mod common;
mod date;
mod engine;
mod node;
mod uri;

pub use capture::{Capture, Match, MatchFailure, Tag, find_all_in, find_in};
pub use node::{CharClass, Grammar, choice, class, digits, lit, not, ows, rws, seq, stri};

pub use common::{delta_seconds, quoted_string, token};
pub use date::http_date;
pub use uri::serialized_origin;
