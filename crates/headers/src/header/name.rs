use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// The closed set of headers this crate knows how to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeaderName {
    XFrameOptions,
    StrictTransportSecurity,
    ContentSecurityPolicy,
    ContentSecurityPolicyReportOnly,
    CacheControl,
    Pragma,
    Expires,
    XContentTypeOptions,
    XPermittedCrossDomainPolicies,
    XXssProtection,
    PublicKeyPins,
    PublicKeyPinsReportOnly,
    SetCookie,
}

impl HeaderName {
    pub const ALL: [HeaderName; 13] = [
        HeaderName::XFrameOptions,
        HeaderName::StrictTransportSecurity,
        HeaderName::ContentSecurityPolicy,
        HeaderName::ContentSecurityPolicyReportOnly,
        HeaderName::CacheControl,
        HeaderName::Pragma,
        HeaderName::Expires,
        HeaderName::XContentTypeOptions,
        HeaderName::XPermittedCrossDomainPolicies,
        HeaderName::XXssProtection,
        HeaderName::PublicKeyPins,
        HeaderName::PublicKeyPinsReportOnly,
        HeaderName::SetCookie,
    ];

    /// The stable snake_case identifier, e.g. `x_frame_options`.
    pub fn id(self) -> &'static str {
        match self {
            HeaderName::XFrameOptions => "x_frame_options",
            HeaderName::StrictTransportSecurity => "strict_transport_security",
            HeaderName::ContentSecurityPolicy => "content_security_policy",
            HeaderName::ContentSecurityPolicyReportOnly => "content_security_policy_report_only",
            HeaderName::CacheControl => "cache_control",
            HeaderName::Pragma => "pragma",
            HeaderName::Expires => "expires",
            HeaderName::XContentTypeOptions => "x_content_type_options",
            HeaderName::XPermittedCrossDomainPolicies => "x_permitted_cross_domain_policies",
            HeaderName::XXssProtection => "x_xss_protection",
            HeaderName::PublicKeyPins => "public_key_pins",
            HeaderName::PublicKeyPinsReportOnly => "public_key_pins_report_only",
            HeaderName::SetCookie => "set_cookie",
        }
    }

    /// The lowercase field name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderName::XFrameOptions => "x-frame-options",
            HeaderName::StrictTransportSecurity => "strict-transport-security",
            HeaderName::ContentSecurityPolicy => "content-security-policy",
            HeaderName::ContentSecurityPolicyReportOnly => "content-security-policy-report-only",
            HeaderName::CacheControl => "cache-control",
            HeaderName::Pragma => "pragma",
            HeaderName::Expires => "expires",
            HeaderName::XContentTypeOptions => "x-content-type-options",
            HeaderName::XPermittedCrossDomainPolicies => "x-permitted-cross-domain-policies",
            HeaderName::XXssProtection => "x-xss-protection",
            HeaderName::PublicKeyPins => "public-key-pins",
            HeaderName::PublicKeyPinsReportOnly => "public-key-pins-report-only",
            HeaderName::SetCookie => "set-cookie",
        }
    }

    pub fn to_http(self) -> http::HeaderName {
        use http::header;
        match self {
            HeaderName::XFrameOptions => header::X_FRAME_OPTIONS,
            HeaderName::StrictTransportSecurity => header::STRICT_TRANSPORT_SECURITY,
            HeaderName::ContentSecurityPolicy => header::CONTENT_SECURITY_POLICY,
            HeaderName::ContentSecurityPolicyReportOnly => header::CONTENT_SECURITY_POLICY_REPORT_ONLY,
            HeaderName::CacheControl => header::CACHE_CONTROL,
            HeaderName::Pragma => header::PRAGMA,
            HeaderName::Expires => header::EXPIRES,
            HeaderName::XContentTypeOptions => header::X_CONTENT_TYPE_OPTIONS,
            HeaderName::XPermittedCrossDomainPolicies => http::HeaderName::from_static("x-permitted-cross-domain-policies"),
            HeaderName::XXssProtection => header::X_XSS_PROTECTION,
            HeaderName::PublicKeyPins => header::PUBLIC_KEY_PINS,
            HeaderName::PublicKeyPinsReportOnly => header::PUBLIC_KEY_PINS_REPORT_ONLY,
            HeaderName::SetCookie => header::SET_COOKIE,
        }
    }
}

impl From<HeaderName> for http::HeaderName {
    fn from(name: HeaderName) -> Self {
        name.to_http()
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized header name: {name}")]
pub struct UnrecognizedHeader {
    name: String,
}

impl FromStr for HeaderName {
    type Err = UnrecognizedHeader;

    /// Looks up a wire name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnrecognizedHeader { name: s.to_string() })
    }
}

impl Serialize for HeaderName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}
