// src/backend/services/registry_service.rs
// Record lifecycle: controller writes, public reads, holder-authorized destroy.

use crate::{
    error::RegistryError,
    metrics,
    models::{
        common::{EventSeq, PrincipalId, RecordId, Timestamp, WriteOutcome},
        EventKind, Label, Record, RegistryEntry, RegistryEvent,
    },
    services::{descriptor, ledger_service},
    storage::{self, events, records},
    utils::guards::ensure_controller,
};
use candid::CandidType;
use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_EVENT_PAGE: u32 = 100;
pub const MAX_EVENT_PAGE: u32 = 500;

/// Full replacement payload for one record. There are no partial updates.
#[derive(CandidType, Deserialize, Clone, Debug, Validate)]
pub struct UpsertRecordRequest {
    pub record_id: RecordId,
    /// Truncated to the label capacity rather than rejected.
    pub label: String,
    #[validate(length(max = 65536))]
    pub description: String,
    #[validate(length(max = 65536))]
    pub file_ref: String,
    #[validate(length(max = 65536))]
    pub image_ref: String,
}

fn validate_request<T: Validate>(req: &T) -> Result<(), RegistryError> {
    req.validate()
        .map_err(|e| RegistryError::InvalidInput(e.to_string()))
}

/// Creates the record or replaces its metadata.
///
/// # Arguments
/// * `req` - The complete new metadata.
/// * `caller` - Must be the controller.
/// * `now` - Transition time in seconds; becomes `last_modified`.
///
/// # Returns
/// * `Created` when no holder existed (the controller becomes holder),
///   `Updated` otherwise (holder and delegate are kept).
pub fn create_or_update(
    req: UpsertRecordRequest,
    caller: PrincipalId,
    now: Timestamp,
) -> Result<WriteOutcome, RegistryError> {
    ensure_controller(caller)?;
    validate_request(&req)?;

    let record_id = req.record_id;
    let record = Record {
        last_modified: now,
        label: Label::from(req.label),
        description: req.description,
        file_ref: req.file_ref,
        image_ref: req.image_ref,
    };

    let outcome = match records::get_entry(record_id) {
        Some(existing) => {
            records::insert_entry(record_id, RegistryEntry { record, ..existing });
            WriteOutcome::Updated
        }
        None => {
            ledger_service::mint(record_id, caller, record, now)?;
            WriteOutcome::Created
        }
    };

    events::append_event(now, EventKind::MetadataUpdate { record_id })?;
    metrics::record_write(outcome, now)?;
    crate::log!("Record {} {:?} by {} at {}", record_id, outcome, caller, now);
    Ok(outcome)
}

/// Retrieves the current metadata of a record.
pub fn get_record(record_id: RecordId) -> Result<Record, RegistryError> {
    records::get_entry(record_id)
        .map(|entry| entry.record)
        .ok_or(RegistryError::NotFound(record_id))
}

/// Destroys a record. Authorization follows the ownership ledger's
/// transfer rule: holder, delegate or operator.
pub fn destroy(record_id: RecordId, caller: PrincipalId, now: Timestamp) -> Result<(), RegistryError> {
    ledger_service::burn(record_id, caller, now).map(|_| ())
}

/// Renders the record's descriptor as a `data:` URI from current state.
pub fn resolve_descriptor(record_id: RecordId) -> Result<String, RegistryError> {
    let record = get_record(record_id)?;
    Ok(descriptor::resolve(
        &record,
        storage::config::get_descriptor_encoding(),
    ))
}

/// Journaled events with `seq >= since`, oldest first.
///
/// `limit` defaults to [`DEFAULT_EVENT_PAGE`] and is capped at
/// [`MAX_EVENT_PAGE`]; a limit of 0 returns an empty page.
pub fn events_since(since: EventSeq, limit: Option<u32>) -> Vec<RegistryEvent> {
    let limit = limit.unwrap_or(DEFAULT_EVENT_PAGE).min(MAX_EVENT_PAGE);
    events::events_since(since, limit as usize)
}
