//! Validation and extraction of HTTP security headers
//!
//! This crate takes a raw block of response header lines and returns, for every
//! security relevant header it recognizes, the header's canonical name and its value
//! exactly as it appeared. Each value is checked against a grammar for that header
//! before it is accepted.
//!
//! # Supported headers
//!
//! `X-Frame-Options`, `Strict-Transport-Security`, `Content-Security-Policy`,
//! `Content-Security-Policy-Report-Only`, `Cache-Control`, `Pragma`, `Expires`,
//! `X-Content-Type-Options`, `X-Permitted-Cross-Domain-Policies`, `X-XSS-Protection`,
//! `Public-Key-Pins`, `Public-Key-Pins-Report-Only` and `Set-Cookie`.
//!
//! # Example
//!
//! ```
//! use micro_security_headers::grammar::Tag;
//! use micro_security_headers::header::{HeaderName, ParseOutput};
//!
//! let output = micro_security_headers::parse(" X-Frame-Options : allow-from http://www.example.com ").unwrap();
//! let ParseOutput::Single(record) = output else { panic!("expected one record") };
//!
//! assert_eq!(record.name(), HeaderName::XFrameOptions);
//! assert_eq!(record.value(), "allow-from http://www.example.com");
//! assert_eq!(record.capture(Tag::Host), Some("www.example.com"));
//!
//! let output = micro_security_headers::parse("X-XSS-Protection: 1; mode=block\r\nServer: gws\r\nX-Frame-Options: SAMEORIGIN").unwrap();
//! assert_eq!(output.len(), 2);
//! ```
//!
//! # Architecture
//!
//! - [`grammar`]: ordered-choice combinators, the matching engine and the shared URI
//!   and HTTP-date sub-grammars
//! - [`header`]: the closed [`header::HeaderName`] set, per-header grammars, the
//!   [`header::HeaderRegistry`] and the record types
//! - [`parser`]: line splitting, the parse pipeline, configuration and errors
//!
//! # Output shape
//!
//! Exactly one recognized header yields [`header::ParseOutput::Single`]; zero or more
//! than one yield [`header::ParseOutput::List`] in input order. Unrecognized header
//! lines are dropped silently.
//!
//! # Error Handling
//!
//! A recognized header whose value does not match its grammar is reported as
//! [`parser::ParseError::MalformedValue`] by default. A parser built with
//! [`parser::MalformedPolicy::Skip`] drops such lines instead.
//!
//! # Logging
//!
//! The crate emits `tracing` events but never installs a subscriber.

pub mod grammar;
pub mod header;
pub mod parser;

mod utils;
pub(crate) use utils::ensure;

pub use parser::parse;
