//! Turns a raw header block into records.
//!
//! The pipeline runs in one direction and keeps no state between calls:
//!
//! 1. the block is split into `name: value` candidate lines
//! 2. each name is looked up in the [`HeaderRegistry`](crate::header::HeaderRegistry),
//!    unknown names are skipped
//! 3. the value is matched against the header grammar
//! 4. matched values become [`HeaderRecord`](crate::header::HeaderRecord)s, assembled
//!    into a [`ParseOutput`](crate::header::ParseOutput)
//!
//! What happens to a recognized header with a malformed value is decided by
//! [`MalformedPolicy`].

mod config;
mod error;
mod header_parser;
mod lines;

pub use config::{MalformedPolicy, ParserConfig};
pub use error::ParseError;
pub use header_parser::{HeaderParser, HeaderParserBuilder, parse};
