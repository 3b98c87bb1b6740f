use std::ops::Range;

use thiserror::Error;

/// Semantic labels attached to sub-spans of a header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A whole directive of a header value.
    Directive,
    /// The value half of a `key=value` directive.
    Value,

    // X-Frame-Options
    AllowFrom,
    Origin,
    Scheme,
    Host,
    Port,

    // Strict-Transport-Security, Public-Key-Pins
    MaxAge,
    IncludeSubDomains,
    Pin,
    ReportUri,

    // X-XSS-Protection
    Protection,
    Mode,

    // Content-Security-Policy
    DirectiveName,
    Source,

    // HTTP-date
    Rfc1123Date,
    Rfc850Date,
    AsctimeDate,

    // Set-Cookie
    CookieName,
    CookieValue,
    Expires,
    Domain,
    Path,
    Secure,
    HttpOnly,
    SameSite,
    Extension,
}

/// A tagged span of the input together with the captures nested inside it.
///
/// Spans are byte offsets into the text the grammar ran over; the matched text is
/// always sliced from that input, never rebuilt from tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    tag: Tag,
    span: Range<usize>,
    children: Vec<Capture>,
}

impl Capture {
    pub(crate) fn new(tag: Tag, span: Range<usize>, children: Vec<Capture>) -> Self {
        Self { tag, span, children }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn children(&self) -> &[Capture] {
        &self.children
    }

    /// The captured text within `input`, which must be the text the grammar matched.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }

    /// Depth-first search for the first capture with `tag`, including `self`.
    pub fn find(&self, tag: Tag) -> Option<&Capture> {
        if self.tag == tag {
            return Some(self);
        }
        find_in(&self.children, tag)
    }

    fn collect<'c>(&'c self, tag: Tag, found: &mut Vec<&'c Capture>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in &self.children {
            child.collect(tag, found);
        }
    }
}

/// Depth-first search for the first capture with `tag` in a forest.
pub fn find_in(captures: &[Capture], tag: Tag) -> Option<&Capture> {
    captures.iter().find_map(|capture| capture.find(tag))
}

/// Every capture with `tag` in a forest, in document order.
pub fn find_all_in(captures: &[Capture], tag: Tag) -> Vec<&Capture> {
    let mut found = Vec::new();
    for capture in captures {
        capture.collect(tag, &mut found);
    }
    found
}

/// A successful match of a grammar over a prefix of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    len: usize,
    captures: Vec<Capture>,
}

impl Match {
    pub(crate) fn new(len: usize, captures: Vec<Capture>) -> Self {
        Self { len, captures }
    }

    /// Number of bytes consumed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The top level captures, in input order.
    pub fn captures(&self) -> &[Capture] {
        &self.captures
    }

    pub fn into_captures(self) -> Vec<Capture> {
        self.captures
    }

    pub fn find(&self, tag: Tag) -> Option<&Capture> {
        find_in(&self.captures, tag)
    }
}

/// A grammar did not match, or did not consume the whole input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no match, furthest position reached: {position}")]
pub struct MatchFailure {
    position: usize,
}

impl MatchFailure {
    pub(crate) fn new(position: usize) -> Self {
        Self { position }
    }

    /// The furthest byte offset any primitive reached before failing.
    pub fn position(&self) -> usize {
        self.position
    }
}
