//! Strict-Transport-Security (RFC 6797, Section 6.1)
//!
//! ```text
//! Strict-Transport-Security = [ directive ] *( ";" [ directive ] )
//! directive                 = "max-age" OWS "=" OWS delta-seconds
//!                           / "includeSubDomains"
//! ```
//!
//! Directives may come in any order. `max-age` values are tolerated inside single or
//! double quotes.

use crate::grammar::{Grammar, Tag, choice, delta_seconds, lit, ows, seq, stri};

use super::separated;

fn directive() -> Grammar {
    choice([
        seq([stri("max-age"), ows(), lit("="), ows(), delta_seconds().tag(Tag::Value)]).tag(Tag::MaxAge),
        stri("includesubdomains").tag(Tag::IncludeSubDomains),
    ])
    .tag(Tag::Directive)
}

pub(super) fn grammar() -> Grammar {
    separated(directive(), ";", true)
}
