// src/backend/models/common.rs
use candid::{CandidType, Principal};
use serde::{Deserialize, Serialize};

pub type RecordId = u64; // Caller-assigned, never auto-incremented
pub type PrincipalId = Principal;

pub type Timestamp = u64; // Epoch seconds
pub type TimestampNs = u64; // Nanoseconds since epoch
pub type EventSeq = u64;

/// Result discriminator of a create-or-update call.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum WriteOutcome {
    Created,
    Updated,
}

/// How free-text fields are embedded into the descriptor document.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum DescriptorEncoding {
    /// Fields are copied into the document as-is. Matches legacy output,
    /// including documents broken by `"` or `\` in a field.
    #[default]
    Verbatim,
    /// Fields are emitted as JSON string literals.
    Escaped,
}
