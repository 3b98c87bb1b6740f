//! X-Permitted-Cross-Domain-Policies
//!
//! ```text
//! X-Permitted-Cross-Domain-Policies
//!   = "none" / "master-only" / "by-content-type" / "by-ftp-filename" / "all"
//! ```

use crate::grammar::{Grammar, Tag, choice, stri};

pub(super) fn grammar() -> Grammar {
    choice([stri("none"), stri("master-only"), stri("by-content-type"), stri("by-ftp-filename"), stri("all")]).tag(Tag::Directive)
}
