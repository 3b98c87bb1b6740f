use thiserror::Error;

use crate::header::HeaderName;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed {name} value on line {line}, matched up to position {position}: {value:?}")]
    MalformedValue { name: HeaderName, value: String, line: usize, position: usize },
}

impl ParseError {
    pub fn malformed_value<S: ToString>(name: HeaderName, value: S, line: usize, position: usize) -> Self {
        Self::MalformedValue { name, value: value.to_string(), line, position }
    }

    /// The header whose value was rejected.
    pub fn header_name(&self) -> HeaderName {
        match self {
            Self::MalformedValue { name, .. } => *name,
        }
    }
}
