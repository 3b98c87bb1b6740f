//! Supported headers, their grammars and the records produced for them.
//!
//! - [`HeaderName`]: the closed set of recognized headers
//! - [`HeaderRegistry`]: case-insensitive name lookup and per-header grammars
//! - [`HeaderRecord`] / [`ParseOutput`]: what a parse call returns

mod name;
mod record;
mod registry;
mod rules;

pub use name::HeaderName;
pub use name::UnrecognizedHeader;
pub use record::HeaderRecord;
pub use record::ParseOutput;
pub use registry::HeaderRegistry;
