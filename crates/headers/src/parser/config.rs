use serde::{Deserialize, Serialize};

/// What to do when a recognized header carries a value its grammar rejects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Fail the whole call with [`ParseError::MalformedValue`](super::ParseError::MalformedValue).
    #[default]
    Reject,
    /// Drop the offending line and keep going.
    Skip,
}

/// Settings for a [`HeaderParser`](super::HeaderParser).
///
/// Every field has a default, so a partial (or empty) JSON object is a valid config:
///
/// ```
/// use micro_security_headers::parser::{MalformedPolicy, ParserConfig};
///
/// let config: ParserConfig = serde_json::from_str(r#"{ "malformed": "skip" }"#).unwrap();
/// assert_eq!(config.malformed, MalformedPolicy::Skip);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub malformed: MalformedPolicy,
}
