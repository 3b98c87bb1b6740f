//! X-Content-Type-Options
//!
//! ```text
//! X-Content-Type-Options = "nosniff"
//! ```

use crate::grammar::{Grammar, Tag, stri};

pub(super) fn grammar() -> Grammar {
    stri("nosniff").tag(Tag::Directive)
}
