//! Case-insensitive lookup from a header field name to its grammar.
//!
//! The registry is built once, on first use, and never mutated afterwards. Grammars
//! carry no per-call state, so the shared instance can be used from any number of
//! threads without locking.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::grammar::{Grammar, Match, MatchFailure};

use super::HeaderName;
use super::rules::grammar_for;

static REGISTRY: Lazy<HeaderRegistry> = Lazy::new(HeaderRegistry::new);

/// Maps every supported header to its canonical name and grammar.
#[derive(Debug)]
pub struct HeaderRegistry {
    entries: HashMap<http::HeaderName, Entry>,
}

#[derive(Debug)]
struct Entry {
    name: HeaderName,
    grammar: Grammar,
}

impl HeaderRegistry {
    /// Returns the process-wide registry, building it on first access.
    pub fn global() -> &'static HeaderRegistry {
        &REGISTRY
    }

    fn new() -> Self {
        let entries: HashMap<_, _> =
            HeaderName::ALL.into_iter().map(|name| (name.to_http(), Entry { name, grammar: grammar_for(name) })).collect();
        debug!(headers = entries.len(), "built header registry");
        Self { entries }
    }

    /// Finds the canonical name for a raw field name, ignoring ASCII case.
    ///
    /// Returns `None` for names outside the supported set, including names that are
    /// not valid HTTP field names at all.
    pub fn lookup(&self, raw_name: &str) -> Option<HeaderName> {
        self.entry(raw_name).map(|entry| entry.name)
    }

    /// The grammar used to validate values of `name`.
    pub fn grammar(&self, name: HeaderName) -> &Grammar {
        &self.entries[&name.to_http()].grammar
    }

    /// Runs the grammar of `name` over a complete, already trimmed value.
    ///
    /// # Errors
    ///
    /// Returns [`MatchFailure`] if `value` is not entirely matched by the grammar.
    pub fn match_value(&self, name: HeaderName, value: &str) -> Result<Match, MatchFailure> {
        self.grammar(name).parse(value)
    }

    fn entry(&self, raw_name: &str) -> Option<&Entry> {
        // http::HeaderName lowercases and rejects non-token names
        let name = http::HeaderName::from_bytes(raw_name.as_bytes()).ok()?;
        self.entries.get(&name)
    }
}
