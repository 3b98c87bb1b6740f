//! Set-Cookie (RFC 6265, Section 4.1.1)
//!
//! ```text
//! set-cookie-string = cookie-pair *( ";" SP cookie-av )
//! cookie-pair       = cookie-name "=" cookie-value
//! cookie-name       = token
//! cookie-value      = *cookie-octet / ( DQUOTE *cookie-octet DQUOTE )
//! cookie-av         = expires-av / max-age-av / domain-av / path-av /
//!                     secure-av / httponly-av / samesite-av / extension-av
//! ```
//!
//! Blanks around ";" are optional. Known attributes are tagged only when they end on
//! an attribute boundary; everything else falls through to extension-av.

use crate::grammar::{CharClass, Grammar, Tag, choice, class, digits, http_date, lit, not, ows, seq, stri, token};

use super::separated;

// %x21 / %x23-2B / %x2D-3A / %x3C-5B / %x5D-7E
const COOKIE_OCTET: CharClass = CharClass::new("cookie-octet", |b| matches!(b, 0x21 | 0x23..=0x2b | 0x2d..=0x3a | 0x3c..=0x5b | 0x5d..=0x7e));

// any CHAR except CTLs or ";"
const AV_CHAR: CharClass = CharClass::new("av-octet", |b| (0x20..=0x7e).contains(&b) && b != b';');

const AV_VALUE_CHAR: CharClass = CharClass::new("av-value", |b| (0x21..=0x7e).contains(&b) && b != b';');

const DOMAIN_CHAR: CharClass = CharClass::new("domain", |b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-');

fn cookie_pair() -> Grammar {
    let octets = || class(COOKIE_OCTET).repeat(0);
    seq([
        token().tag(Tag::CookieName),
        lit("="),
        choice([seq([lit("\""), octets(), lit("\"")]), octets()]).tag(Tag::CookieValue),
    ])
}

/// The attribute ends here: only blanks remain before the next ";" or the end.
fn boundary() -> Grammar {
    not(seq([ows(), class(AV_CHAR)]))
}

fn attribute() -> Grammar {
    let known = choice([
        seq([stri("expires="), http_date()]).tag(Tag::Expires),
        seq([stri("max-age="), lit("-").maybe(), digits()]).tag(Tag::MaxAge),
        seq([stri("domain="), class(DOMAIN_CHAR).repeat(1).tag(Tag::Value)]).tag(Tag::Domain),
        seq([stri("path="), class(AV_VALUE_CHAR).repeat(1).tag(Tag::Value)]).tag(Tag::Path),
        stri("secure").tag(Tag::Secure),
        stri("httponly").tag(Tag::HttpOnly),
        seq([stri("samesite="), choice([stri("strict"), stri("lax"), stri("none")]).tag(Tag::Value)]).tag(Tag::SameSite),
    ]);

    choice([seq([known, boundary()]), class(AV_CHAR).repeat(1).tag(Tag::Extension)])
}

pub(super) fn grammar() -> Grammar {
    seq([cookie_pair(), seq([ows(), lit(";"), ows(), separated(attribute(), ";", true)]).maybe()])
}
