//! Content-Security-Policy (CSP Level 2, Section 3.2)
//!
//! ```text
//! policy-token    = [ directive-token *( ";" [ directive-token ] ) ]
//! directive-token = *WSP [ directive-name [ WSP directive-value ] ]
//! directive-name  = 1*( ALPHA / DIGIT / "-" )
//! directive-value = *( WSP / <VCHAR except ";" and ","> )
//! ```
//!
//! Directive names and source expressions are captured but not validated.
//! Also used for Content-Security-Policy-Report-Only.

use crate::grammar::{CharClass, Grammar, Tag, class, rws, seq};

use super::separated;

const DIRECTIVE_NAME_CHAR: CharClass = CharClass::new("directive-name", |b| b.is_ascii_alphanumeric() || b == b'-');

const SOURCE_CHAR: CharClass = CharClass::new("source", |b| (0x21..=0x7e).contains(&b) && b != b';' && b != b',');

fn directive() -> Grammar {
    seq([
        class(DIRECTIVE_NAME_CHAR).repeat(1).tag(Tag::DirectiveName),
        seq([rws(), class(SOURCE_CHAR).repeat(1).tag(Tag::Source)]).repeat(0),
    ])
    .tag(Tag::Directive)
}

pub(super) fn grammar() -> Grammar {
    separated(directive(), ";", true)
}
