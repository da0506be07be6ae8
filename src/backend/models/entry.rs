// src/backend/models/entry.rs
use crate::models::common::PrincipalId;
use crate::models::record::Record;
use candid::CandidType;
use serde::{Deserialize, Serialize};

/// Everything the registry knows about one record id.
///
/// Holder and metadata live in one value, so inserting or removing the
/// entry creates or destroys both together.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    pub holder: PrincipalId,
    /// Principal allowed to transfer or destroy this record only.
    pub approved: Option<PrincipalId>,
    pub record: Record,
}

impl RegistryEntry {
    pub fn minted(holder: PrincipalId, record: Record) -> Self {
        Self {
            holder,
            approved: None,
            record,
        }
    }
}
