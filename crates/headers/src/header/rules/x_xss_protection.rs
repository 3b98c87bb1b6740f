//! X-XSS-Protection
//!
//! ```text
//! X-XSS-Protection = ( "0" / "1" ) *( OWS ";" OWS xss-directive )
//! xss-directive    = "mode" OWS "=" OWS "block"
//!                  / "report" OWS "=" OWS report-uri
//! ```

use crate::grammar::{CharClass, Grammar, Tag, choice, class, lit, ows, seq, stri};

use super::separated;

const REPORT_URI_CHAR: CharClass = CharClass::new("report-uri", |b| (0x21..=0x7e).contains(&b) && b != b';' && b != b',');

fn xss_directive() -> Grammar {
    choice([
        seq([stri("mode"), ows(), lit("="), ows(), stri("block").tag(Tag::Value)]).tag(Tag::Mode),
        seq([stri("report"), ows(), lit("="), ows(), class(REPORT_URI_CHAR).repeat(1).tag(Tag::Value)]).tag(Tag::ReportUri),
    ])
}

pub(super) fn grammar() -> Grammar {
    let protection = choice([lit("0"), lit("1")]).tag(Tag::Protection);
    seq([protection, seq([ows(), lit(";"), ows(), separated(xss_directive(), ";", false)]).maybe()])
}
