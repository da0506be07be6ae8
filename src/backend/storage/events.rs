// src/backend/storage/events.rs
use crate::error::RegistryError;
use crate::models::common::{EventSeq, Timestamp};
use crate::models::{EventKind, RegistryEvent};
use crate::storage::memory::{get_event_seq_memory, get_events_memory, Memory};
use crate::storage::storable::Cbor;
use ic_stable_structures::{StableBTreeMap, StableCell};
use std::cell::RefCell;

/// Number of most recent events kept for polling listeners.
pub const MAX_RETAINED_EVENTS: u64 = 10_000;

type StorableEvent = Cbor<RegistryEvent>;

thread_local! {
    /// Sequence number the next event will receive.
    static NEXT_SEQ: RefCell<StableCell<u64, Memory>> = RefCell::new(
        StableCell::init(get_event_seq_memory(), 0)
            .expect("Failed to initialize event sequence cell")
    );

    /// Event journal: Key = sequence number, Value = event.
    static EVENTS: RefCell<StableBTreeMap<EventSeq, StorableEvent, Memory>> = RefCell::new(
        StableBTreeMap::init(get_events_memory())
    );
}

/// Get the sequence number the next appended event will receive.
pub fn next_seq() -> EventSeq {
    NEXT_SEQ.with(|cell| *cell.borrow().get())
}

/// Appends an event and evicts the one falling out of the retention window.
pub fn append_event(timestamp: Timestamp, kind: EventKind) -> Result<EventSeq, RegistryError> {
    let seq = next_seq();
    let next = seq
        .checked_add(1)
        .ok_or_else(|| RegistryError::StorageError("Event sequence overflow".to_string()))?;
    NEXT_SEQ.with(|cell| {
        cell.borrow_mut()
            .set(next)
            .map_err(|e| RegistryError::StorageError(format!("Failed to advance event sequence: {:?}", e)))
    })?;

    EVENTS.with(|map_ref| {
        let mut map = map_ref.borrow_mut();
        map.insert(
            seq,
            Cbor(RegistryEvent {
                seq,
                timestamp,
                kind,
            }),
        );
        if seq >= MAX_RETAINED_EVENTS {
            map.remove(&(seq - MAX_RETAINED_EVENTS));
        }
    });
    Ok(seq)
}

/// Returns up to `limit` retained events with `seq >= since`, oldest first.
pub fn events_since(since: EventSeq, limit: usize) -> Vec<RegistryEvent> {
    EVENTS.with(|map_ref| {
        map_ref
            .borrow()
            .range(since..)
            .take(limit)
            .map(|(_seq, event)| event.0)
            .collect()
    })
}
