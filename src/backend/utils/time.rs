use crate::models::common::{Timestamp, TimestampNs};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Returns the current Internet Computer time as nanoseconds since epoch.
#[cfg(target_arch = "wasm32")]
pub fn get_current_time_ns() -> TimestampNs {
    ic_cdk::api::time()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_current_time_ns() -> TimestampNs {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Current time in whole seconds, the resolution records are stamped with.
pub fn get_current_time_secs() -> Timestamp {
    ns_to_secs(get_current_time_ns())
}

pub fn ns_to_secs(ns: TimestampNs) -> Timestamp {
    ns / NANOS_PER_SEC
}
