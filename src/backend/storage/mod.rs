// src/backend/storage/mod.rs
// Stable memory layout: one virtual memory per structure, all values CBOR-encoded.

pub mod config;
pub mod events;
pub mod memory;
pub mod metrics;
pub mod operators;
pub mod records;
pub mod storable;

// Re-export key storage structures and functions for easier access
pub use memory::Memory;
pub use metrics::get_metrics;
pub use storable::Cbor;
