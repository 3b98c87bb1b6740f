//! Cache-Control (RFC 7234, Section 5.2)
//!
//! ```text
//! Cache-Control   = 1#cache-directive
//! cache-directive = token [ "=" ( token / quoted-string ) ]
//! ```
//!
//! Directive names are not checked against the registered vocabulary.

use crate::grammar::Grammar;

use super::{key_value_directive, separated};

pub(super) fn grammar() -> Grammar {
    separated(key_value_directive(), ",", false)
}
