use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::grammar::{Capture, Tag, find_all_in, find_in};

use super::HeaderName;

/// One recognized header line whose value matched its grammar.
///
/// `value` is the header value trimmed of surrounding whitespace and otherwise exactly
/// as it appeared. The capture tree produced by the grammar is kept alongside, with
/// spans relative to `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    name: HeaderName,
    value: String,
    captures: Vec<Capture>,
}

impl HeaderRecord {
    pub(crate) fn new(name: HeaderName, value: &str, captures: Vec<Capture>) -> Self {
        Self { name, value: value.to_string(), captures }
    }

    pub fn name(&self) -> HeaderName {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The top level captures produced by the header grammar.
    pub fn capture_tree(&self) -> &[Capture] {
        &self.captures
    }

    /// Text of the first capture tagged `tag`, searching depth-first.
    pub fn capture(&self, tag: Tag) -> Option<&str> {
        find_in(&self.captures, tag).map(|capture| capture.text(&self.value))
    }

    /// Text of every capture tagged `tag`, in the order they appear in the value.
    pub fn captures(&self, tag: Tag) -> Vec<&str> {
        find_all_in(&self.captures, tag).into_iter().map(|capture| capture.text(&self.value)).collect()
    }
}

/// Serializes as a single entry map, `{ "x_frame_options": "sameorigin" }`.
impl Serialize for HeaderRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

/// The result of parsing a header block.
///
/// Exactly one recognized header yields [`ParseOutput::Single`]; zero or several
/// yield [`ParseOutput::List`] in input order. The single case is never wrapped in a
/// one element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParseOutput {
    Single(HeaderRecord),
    List(Vec<HeaderRecord>),
}

impl ParseOutput {
    /// Assembles records in input order into the output shape.
    pub fn from_records(mut records: Vec<HeaderRecord>) -> Self {
        if records.len() == 1 {
            if let Some(record) = records.pop() {
                return ParseOutput::Single(record);
            }
        }
        ParseOutput::List(records)
    }

    pub fn len(&self) -> usize {
        match self {
            ParseOutput::Single(_) => 1,
            ParseOutput::List(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_single(&self) -> bool {
        matches!(self, ParseOutput::Single(_))
    }

    /// The records as a slice, regardless of shape.
    pub fn records(&self) -> &[HeaderRecord] {
        match self {
            ParseOutput::Single(record) => std::slice::from_ref(record),
            ParseOutput::List(records) => records,
        }
    }

    pub fn into_records(self) -> Vec<HeaderRecord> {
        match self {
            ParseOutput::Single(record) => vec![record],
            ParseOutput::List(records) => records,
        }
    }

    /// The first record with `name`, if any.
    pub fn get(&self, name: HeaderName) -> Option<&HeaderRecord> {
        self.records().iter().find(|record| record.name == name)
    }
}
