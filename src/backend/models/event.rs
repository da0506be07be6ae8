// src/backend/models/event.rs
use crate::models::common::{EventSeq, PrincipalId, RecordId, Timestamp};
use candid::CandidType;
use serde::{Deserialize, Serialize};

/// A change notification as seen by polling listeners.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegistryEvent {
    pub seq: EventSeq,
    /// Seconds since epoch.
    pub timestamp: Timestamp,
    pub kind: EventKind,
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Record metadata was written (create or update).
    MetadataUpdate { record_id: RecordId },
    /// `from: None` is a mint, `to: None` is a burn.
    Transfer {
        record_id: RecordId,
        from: Option<PrincipalId>,
        to: Option<PrincipalId>,
    },
    Approval {
        record_id: RecordId,
        holder: PrincipalId,
        approved: Option<PrincipalId>,
    },
    ApprovalForAll {
        holder: PrincipalId,
        operator: PrincipalId,
        approved: bool,
    },
}
