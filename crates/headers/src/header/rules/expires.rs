//! Expires (RFC 7234, Section 5.3)
//!
//! ```text
//! Expires = HTTP-date
//! ```

use crate::grammar::{Grammar, http_date};

pub(super) fn grammar() -> Grammar {
    http_date()
}
