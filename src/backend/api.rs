// src/backend/api.rs
// Candid endpoints. Caller and clock are captured here and handed to the services.

use crate::{
    error::RegistryError,
    metrics::RegistryMetrics,
    models::{
        common::{EventSeq, PrincipalId, RecordId, WriteOutcome},
        Record, RegistryEvent,
    },
    services::{
        ledger_service,
        registry_service::{self, UpsertRecordRequest},
    },
    storage,
    utils::{
        guards::{check_cycles, controller_guard},
        time::get_current_time_secs,
    },
};
use candid::{CandidType, Deserialize};
use ic_cdk::caller;
use ic_cdk_macros::{query, update};

#[derive(CandidType, Deserialize, Clone, Debug, Default)]
pub struct GetMetricsResponse {
    pub metrics: RegistryMetrics,
    pub cycle_balance: u128,
}

/// Returning `Err` from an update keeps whatever was already written, so a
/// storage failure part-way through a transition traps instead. The trap
/// rolls back every change made by the current message.
fn commit<T>(result: Result<T, RegistryError>) -> Result<T, RegistryError> {
    if let Err(RegistryError::StorageError(msg)) = &result {
        ic_cdk::trap(msg);
    }
    result
}

// --- Registry Endpoints ---

#[update]
fn create_or_update(req: UpsertRecordRequest) -> Result<WriteOutcome, RegistryError> {
    check_cycles()?;
    commit(registry_service::create_or_update(
        req,
        caller(),
        get_current_time_secs(),
    ))
}

#[query]
fn get_record(record_id: RecordId) -> Result<Record, RegistryError> {
    registry_service::get_record(record_id)
}

#[update]
fn destroy(record_id: RecordId) -> Result<(), RegistryError> {
    check_cycles()?;
    commit(registry_service::destroy(
        record_id,
        caller(),
        get_current_time_secs(),
    ))
}

#[query]
fn resolve_descriptor(record_id: RecordId) -> Result<String, RegistryError> {
    registry_service::resolve_descriptor(record_id)
}

#[query]
fn get_controller() -> PrincipalId {
    storage::config::get_controller()
}

#[query]
fn events_since(since: EventSeq, limit: Option<u32>) -> Vec<RegistryEvent> {
    registry_service::events_since(since, limit)
}

// --- Ownership Ledger Endpoints ---

#[query]
fn holder_of(record_id: RecordId) -> Result<PrincipalId, RegistryError> {
    ledger_service::holder_of(record_id)
}

#[query]
fn get_approved(record_id: RecordId) -> Result<Option<PrincipalId>, RegistryError> {
    ledger_service::get_approved(record_id)
}

#[query]
fn is_approved(record_id: RecordId, principal: PrincipalId) -> Result<bool, RegistryError> {
    ledger_service::is_holder_or_approved(record_id, &principal)
}

#[query]
fn is_approved_for_all(holder: PrincipalId, operator: PrincipalId) -> bool {
    ledger_service::is_approved_for_all(&holder, &operator)
}

#[update]
fn approve(record_id: RecordId, delegate: Option<PrincipalId>) -> Result<(), RegistryError> {
    check_cycles()?;
    commit(ledger_service::approve(
        record_id,
        delegate,
        caller(),
        get_current_time_secs(),
    ))
}

#[update]
fn set_approval_for_all(operator: PrincipalId, approved: bool) -> Result<(), RegistryError> {
    check_cycles()?;
    commit(ledger_service::set_approval_for_all(
        operator,
        approved,
        caller(),
        get_current_time_secs(),
    ))
}

#[update]
fn transfer(record_id: RecordId, to: PrincipalId) -> Result<(), RegistryError> {
    check_cycles()?;
    commit(ledger_service::transfer(
        record_id,
        to,
        caller(),
        get_current_time_secs(),
    ))
}

// --- Metrics Endpoint ---

#[query(guard = "controller_guard")]
fn get_metrics() -> Result<GetMetricsResponse, RegistryError> {
    Ok(GetMetricsResponse {
        metrics: storage::get_metrics(),
        cycle_balance: ic_cdk::api::canister_balance128(),
    })
}
