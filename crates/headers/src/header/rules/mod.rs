//! One grammar per supported header.
//!
//! Every grammar describes the whole trimmed header value; the registry runs them with
//! [`Grammar::parse`], so trailing garbage is a failure rather than an ignored suffix.

mod cache_control;
mod content_security_policy;
mod expires;
mod pragma;
mod public_key_pins;
mod set_cookie;
mod strict_transport_security;
mod x_content_type_options;
mod x_frame_options;
mod x_permitted_cross_domain_policies;
mod x_xss_protection;

use crate::grammar::{Grammar, Tag, choice, lit, ows, quoted_string, seq, token};

use super::HeaderName;

/// Builds the grammar for `name`.
pub(crate) fn grammar_for(name: HeaderName) -> Grammar {
    match name {
        HeaderName::XFrameOptions => x_frame_options::grammar(),
        HeaderName::StrictTransportSecurity => strict_transport_security::grammar(),
        HeaderName::ContentSecurityPolicy | HeaderName::ContentSecurityPolicyReportOnly => content_security_policy::grammar(),
        HeaderName::CacheControl => cache_control::grammar(),
        HeaderName::Pragma => pragma::grammar(),
        HeaderName::Expires => expires::grammar(),
        HeaderName::XContentTypeOptions => x_content_type_options::grammar(),
        HeaderName::XPermittedCrossDomainPolicies => x_permitted_cross_domain_policies::grammar(),
        HeaderName::XXssProtection => x_xss_protection::grammar(),
        HeaderName::PublicKeyPins | HeaderName::PublicKeyPinsReportOnly => public_key_pins::grammar(),
        HeaderName::SetCookie => set_cookie::grammar(),
    }
}

/// `item *( OWS separator OWS item )`, optionally followed by one more separator.
fn separated(item: Grammar, separator: &'static str, allow_trailing: bool) -> Grammar {
    let mut list = vec![item.clone(), seq([ows(), lit(separator), ows(), item]).repeat(0)];
    if allow_trailing {
        list.push(seq([ows(), lit(separator)]).maybe());
    }
    seq(list)
}

/// `token [ "=" ( token / quoted-string ) ]`, the directive shape shared by
/// `Cache-Control` and `Pragma`.
fn key_value_directive() -> Grammar {
    seq([
        token().tag(Tag::DirectiveName),
        seq([lit("="), choice([token(), quoted_string()]).tag(Tag::Value)]).maybe(),
    ])
    .tag(Tag::Directive)
}
