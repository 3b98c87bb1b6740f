//! Serialized origin grammar used by `X-Frame-Options: allow-from`.
//!
//! ```text
//! serialized-origin = scheme "://" host [ ":" port ]
//! scheme            = 1*ALPHA
//! host              = 1*( ALPHA / DIGIT / "." / "-" )
//! port              = 1*DIGIT
//! ```
//!
//! Only origins are recognized: no userinfo, path, query or percent-decoding.

use super::capture::Tag;
use super::common::ALPHA;
use super::node::{CharClass, Grammar, class, digits, lit, seq};

const HOST_CHAR: CharClass = CharClass::new("host", |b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-');

pub fn serialized_origin() -> Grammar {
    seq([
        class(ALPHA).repeat(1).tag(Tag::Scheme),
        lit("://"),
        class(HOST_CHAR).repeat(1).tag(Tag::Host),
        seq([lit(":"), digits().tag(Tag::Port)]).maybe(),
    ])
    .tag(Tag::Origin)
}
