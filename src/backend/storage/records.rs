// src/backend/storage/records.rs
use crate::models::{common::RecordId, RegistryEntry};
use crate::storage::memory::{get_records_memory, Memory};
use crate::storage::storable::Cbor;
use ic_stable_structures::StableBTreeMap;
use std::cell::RefCell;

type StorableEntry = Cbor<RegistryEntry>;

thread_local! {
    /// Registry entries: Key = record id, Value = holder, delegate and metadata.
    /// Presence of a key is what makes a record exist.
    static ENTRIES: RefCell<StableBTreeMap<RecordId, StorableEntry, Memory>> = RefCell::new(
        StableBTreeMap::init(get_records_memory())
    );
}

/// Retrieves the entry stored under `record_id`.
pub fn get_entry(record_id: RecordId) -> Option<RegistryEntry> {
    ENTRIES.with(|map_ref| map_ref.borrow().get(&record_id).map(Cbor::into_inner))
}

/// Inserts or replaces the entry, returning the previous one if any.
pub fn insert_entry(record_id: RecordId, entry: RegistryEntry) -> Option<RegistryEntry> {
    ENTRIES.with(|map_ref| {
        map_ref
            .borrow_mut()
            .insert(record_id, Cbor(entry))
            .map(Cbor::into_inner)
    })
}

/// Removes the entry, returning it if it existed.
pub fn remove_entry(record_id: RecordId) -> Option<RegistryEntry> {
    ENTRIES.with(|map_ref| map_ref.borrow_mut().remove(&record_id).map(Cbor::into_inner))
}

pub fn contains_entry(record_id: RecordId) -> bool {
    ENTRIES.with(|map_ref| map_ref.borrow().contains_key(&record_id))
}
