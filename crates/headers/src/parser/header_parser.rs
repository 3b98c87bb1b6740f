//! The parse pipeline: split lines, look names up, match values, assemble.

use tracing::{debug, trace, warn};

use crate::header::{HeaderRecord, HeaderRegistry, ParseOutput};

use super::lines::header_lines;
use super::{MalformedPolicy, ParseError, ParserConfig};

/// Parses raw header blocks into [`ParseOutput`]s.
///
/// A parser is cheap to create and holds no per-call state; the same instance can be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct HeaderParser {
    registry: &'static HeaderRegistry,
    config: ParserConfig,
}

impl HeaderParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { registry: HeaderRegistry::global(), config }
    }

    pub fn builder() -> HeaderParserBuilder {
        HeaderParserBuilder::new()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a raw header block.
    ///
    /// Lines whose name is not a supported header are ignored. Every supported header
    /// whose value matches its grammar produces one [`HeaderRecord`], in input order.
    ///
    /// # Errors
    ///
    /// With [`MalformedPolicy::Reject`], returns [`ParseError::MalformedValue`] for the
    /// first supported header whose value does not match its grammar.
    pub fn parse(&self, raw: &str) -> Result<ParseOutput, ParseError> {
        let mut records = Vec::new();

        for line in header_lines(raw) {
            trace!(line = line.number, name = line.name, "candidate header line");

            let Some(name) = self.registry.lookup(line.name) else {
                debug!(line = line.number, name = line.name, "skip unrecognized header");
                continue;
            };

            match self.registry.match_value(name, line.value) {
                Ok(matched) => records.push(HeaderRecord::new(name, line.value, matched.into_captures())),
                Err(failure) => match self.config.malformed {
                    MalformedPolicy::Reject => {
                        return Err(ParseError::malformed_value(name, line.value, line.number, failure.position()));
                    }
                    MalformedPolicy::Skip => {
                        warn!(line = line.number, %name, value = line.value, position = failure.position(), "skip malformed header value");
                    }
                },
            }
        }

        Ok(ParseOutput::from_records(records))
    }
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

#[derive(Debug, Default)]
pub struct HeaderParserBuilder {
    config: ParserConfig,
}

impl HeaderParserBuilder {
    fn new() -> Self {
        Self::default()
    }

    pub fn malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.config.malformed = policy;
        self
    }

    pub fn config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> HeaderParser {
        HeaderParser::new(self.config)
    }
}

/// Parses a raw header block with the default, strict, parser.
///
/// # Errors
///
/// Returns [`ParseError::MalformedValue`] when a supported header has a value its
/// grammar rejects.
pub fn parse(raw: &str) -> Result<ParseOutput, ParseError> {
    HeaderParser::default().parse(raw)
}
