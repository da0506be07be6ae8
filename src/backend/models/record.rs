// src/backend/models/record.rs
use crate::models::common::Timestamp;
use candid::types::{Serializer, Type};
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum label size in bytes.
pub const LABEL_CAPACITY: usize = 24;

/// Fixed-capacity document name.
///
/// Longer input is cut to the longest prefix of at most [`LABEL_CAPACITY`]
/// bytes that ends on a character boundary. Decoding goes through the same
/// constructor, so a stored label can never exceed the capacity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Label(String);

impl Label {
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(LABEL_CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        Label(text[..end].to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        if text.len() <= LABEL_CAPACITY {
            Label(text)
        } else {
            Label::new(&text)
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::new(text)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Travels as plain `text` on the Candid interface.
impl CandidType for Label {
    fn _ty() -> Type {
        String::_ty()
    }

    fn idl_serialize<S>(&self, serializer: S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.0.idl_serialize(serializer)
    }
}

/// Metadata stored for one record id.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Seconds since epoch of the last successful write.
    pub last_modified: Timestamp,
    pub label: Label,
    pub description: String,
    /// URL or URI of the document itself.
    pub file_ref: String,
    /// URL or URI of a preview image.
    pub image_ref: String,
}
