// src/backend/lib.rs

pub mod api;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

use crate::api::GetMetricsResponse;
use crate::error::RegistryError;
use crate::models::{
    common::{EventSeq, PrincipalId, RecordId, WriteOutcome},
    InitArgs, Record, RegistryEvent,
};
use crate::services::registry_service::UpsertRecordRequest;
use crate::storage::config::DEFAULT_MIN_CYCLES_THRESHOLD;

#[ic_cdk::init]
fn init(args: Option<InitArgs>) {
    let args = args.unwrap_or_default();
    // The installer becomes the controller for the lifetime of the canister.
    let controller = ic_cdk::caller();
    if let Err(e) = storage::config::init_config(
        controller,
        args.descriptor_encoding.unwrap_or_default(),
        args.min_cycles_threshold
            .unwrap_or(DEFAULT_MIN_CYCLES_THRESHOLD),
    ) {
        ic_cdk::trap(&e.to_string());
    }
    crate::log!("Identity registry canister initialized. Controller={}", controller);
}

#[ic_cdk::post_upgrade]
fn post_upgrade() {
    // Stable memory carries records, approvals, events and config across upgrades.
    crate::log!(
        "Identity registry canister upgraded. Controller={}, next event seq={}",
        storage::config::get_controller(),
        storage::events::next_seq()
    );
}

// Export Candid interface
ic_cdk::export_candid!();
