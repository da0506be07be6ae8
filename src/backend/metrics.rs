// src/backend/metrics.rs
use crate::error::RegistryError;
use crate::models::common::{Timestamp, WriteOutcome};
use crate::storage::metrics::update_metrics;
use candid::{CandidType, Deserialize};
use serde::Serialize;

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryMetrics {
    /// Records currently in the registry.
    pub live_records: u64,
    pub records_created: u64,
    pub records_updated: u64,
    pub records_destroyed: u64,
    /// Holder changes, excluding mints and burns.
    pub transfers: u64,
    /// Seconds since epoch of the last metadata write.
    pub last_write_at: Option<Timestamp>,
}

pub fn record_write(outcome: WriteOutcome, at: Timestamp) -> Result<(), RegistryError> {
    update_metrics(|metrics| {
        match outcome {
            WriteOutcome::Created => {
                metrics.records_created = metrics.records_created.saturating_add(1);
                metrics.live_records = metrics.live_records.saturating_add(1);
            }
            WriteOutcome::Updated => {
                metrics.records_updated = metrics.records_updated.saturating_add(1);
            }
        }
        metrics.last_write_at = Some(at);
    })
}

pub fn record_destroy() -> Result<(), RegistryError> {
    update_metrics(|metrics| {
        metrics.records_destroyed = metrics.records_destroyed.saturating_add(1);
        metrics.live_records = metrics.live_records.saturating_sub(1);
    })
}

pub fn record_transfer() -> Result<(), RegistryError> {
    update_metrics(|metrics| {
        metrics.transfers = metrics.transfers.saturating_add(1);
    })
}
