//! X-Frame-Options (RFC 7034)
//!
//! ```text
//! X-Frame-Options = "DENY"
//!                 / "SAMEORIGIN"
//!                 / ( "ALLOW-FROM" RWS SERIALIZED-ORIGIN )
//! ```
//!
//! `ALLOWALL` is not in the RFC but is still sent by some servers. Only one directive
//! may be present.

use crate::grammar::{Grammar, Tag, choice, rws, seq, serialized_origin, stri};

pub(super) fn grammar() -> Grammar {
    choice([
        stri("deny"),
        stri("sameorigin"),
        seq([stri("allow-from"), rws(), serialized_origin()]).tag(Tag::AllowFrom),
        stri("allowall"),
    ])
    .tag(Tag::Directive)
}
