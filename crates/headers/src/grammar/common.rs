//! Common rules shared by the header grammars.

use super::node::{CharClass, Grammar, choice, class, digits, lit, seq};

pub const ALPHA: CharClass = CharClass::new("ALPHA", |b| b.is_ascii_alphabetic());

pub const DIGIT: CharClass = CharClass::new("DIGIT", |b| b.is_ascii_digit());

// RFC 7230: Section 3.2.6
//
// `tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
//          "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA`
pub const TCHAR: CharClass = CharClass::new("tchar", is_tchar);

// Visible USASCII character.
pub const VCHAR: CharClass = CharClass::new("VCHAR", |b| (0x21..=0x7e).contains(&b));

// RFC 7230: Section 3.2.6
//
// `qdtext = HTAB / SP / %x21 / %x23-5B / %x5D-7E`
pub const QDTEXT: CharClass = CharClass::new("qdtext", |b| matches!(b, b'\t' | b' ' | 0x21 | 0x23..=0x5b | 0x5d..=0x7e));

pub fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

// `token = 1*tchar`
pub fn token() -> Grammar {
    class(TCHAR).repeat(1)
}

// RFC 7230: Section 3.2.6
//
// `quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE`
// `quoted-pair   = "\" ( HTAB / SP / VCHAR )`
pub fn quoted_string() -> Grammar {
    let quoted_pair = seq([lit("\\"), choice([class(VCHAR), lit(" "), lit("\t")])]);
    seq([lit("\""), choice([class(QDTEXT), quoted_pair]).repeat(0), lit("\"")])
}

// `delta-seconds = 1*DIGIT`, tolerated inside double or single quotes
pub fn delta_seconds() -> Grammar {
    choice([seq([lit("\""), digits(), lit("\"")]), seq([lit("'"), digits(), lit("'")]), digits()])
}
