// src/backend/storage/memory.rs
use ic_stable_structures::memory_manager::{MemoryId, MemoryManager, VirtualMemory};
use ic_stable_structures::DefaultMemoryImpl;
use std::cell::RefCell;

// Memory IDs for stable structures. Never reuse or renumber an ID once
// deployed: upgrades read existing data back from the same region.
pub(crate) const CONTROLLER_MEM_ID: MemoryId = MemoryId::new(0);
pub(crate) const DESCRIPTOR_ENCODING_MEM_ID: MemoryId = MemoryId::new(1);
pub(crate) const MIN_CYCLES_THRESHOLD_MEM_ID: MemoryId = MemoryId::new(2);
const RECORDS_MEM_ID: MemoryId = MemoryId::new(3);
const OPERATORS_MEM_ID: MemoryId = MemoryId::new(4);
const EVENTS_MEM_ID: MemoryId = MemoryId::new(5);
const EVENT_SEQ_MEM_ID: MemoryId = MemoryId::new(6);
const METRICS_MEM_ID: MemoryId = MemoryId::new(7);

// Define memory type alias
pub type Memory = VirtualMemory<DefaultMemoryImpl>;

thread_local! {
    static MEMORY_MANAGER: RefCell<MemoryManager<DefaultMemoryImpl>> = RefCell::new(
        MemoryManager::init(DefaultMemoryImpl::default())
    );
}

/// Get memory instance for a specific MemoryId.
pub fn get_memory(id: MemoryId) -> Memory {
    MEMORY_MANAGER.with(|m| m.borrow().get(id))
}

pub fn get_records_memory() -> Memory {
    get_memory(RECORDS_MEM_ID)
}

pub fn get_operators_memory() -> Memory {
    get_memory(OPERATORS_MEM_ID)
}

pub fn get_events_memory() -> Memory {
    get_memory(EVENTS_MEM_ID)
}

pub fn get_event_seq_memory() -> Memory {
    get_memory(EVENT_SEQ_MEM_ID)
}

pub fn get_metrics_memory() -> Memory {
    get_memory(METRICS_MEM_ID)
}
