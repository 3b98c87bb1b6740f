//! Pragma (RFC 7234, Section 5.4)
//!
//! ```text
//! Pragma           = 1#pragma-directive
//! pragma-directive = "no-cache" / extension-pragma
//! extension-pragma = token [ "=" ( token / quoted-string ) ]
//! ```

use crate::grammar::Grammar;

use super::{key_value_directive, separated};

pub(super) fn grammar() -> Grammar {
    separated(key_value_directive(), ",", false)
}
