//! Public-Key-Pins (RFC 7469, Section 2.1)
//!
//! ```text
//! Public-Key-Pins = directive *( OWS ";" OWS directive ) [ OWS ";" ]
//! directive       = "pin-" token OWS "=" OWS DQUOTE base64 DQUOTE
//!                 / "max-age" OWS "=" OWS delta-seconds
//!                 / "includeSubDomains"
//!                 / "report-uri" OWS "=" OWS quoted-string
//! ```
//!
//! Also used for Public-Key-Pins-Report-Only.

use crate::grammar::{CharClass, Grammar, Tag, choice, class, delta_seconds, lit, ows, quoted_string, seq, stri, token};

use super::separated;

const BASE64_CHAR: CharClass = CharClass::new("base64", |b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='));

fn directive() -> Grammar {
    let assign = || seq([ows(), lit("="), ows()]);
    let pin = seq([lit("\""), class(BASE64_CHAR).repeat(1).tag(Tag::Value), lit("\"")]);

    choice([
        seq([stri("max-age"), assign(), delta_seconds().tag(Tag::Value)]).tag(Tag::MaxAge),
        stri("includesubdomains").tag(Tag::IncludeSubDomains),
        seq([stri("report-uri"), assign(), quoted_string().tag(Tag::Value)]).tag(Tag::ReportUri),
        seq([stri("pin-"), token(), assign(), pin]).tag(Tag::Pin),
    ])
    .tag(Tag::Directive)
}

pub(super) fn grammar() -> Grammar {
    separated(directive(), ";", true)
}
