// src/backend/storage/config.rs
use crate::error::RegistryError;
use crate::models::common::{DescriptorEncoding, PrincipalId};
use crate::storage::memory::{
    get_memory, Memory, CONTROLLER_MEM_ID, DESCRIPTOR_ENCODING_MEM_ID, MIN_CYCLES_THRESHOLD_MEM_ID,
};
use crate::storage::storable::Cbor;
use candid::Principal;
use ic_stable_structures::StableCell;
use std::cell::RefCell;

// Default values (used until init writes the cells)
const DEFAULT_CONTROLLER: Principal = Principal::anonymous();
pub const DEFAULT_MIN_CYCLES_THRESHOLD: u128 = 10_000_000_000; // 10B cycles

thread_local! {
    /// The single principal allowed to create or update records.
    static CONTROLLER: RefCell<StableCell<Cbor<PrincipalId>, Memory>> = RefCell::new(
        StableCell::init(get_memory(CONTROLLER_MEM_ID), Cbor(DEFAULT_CONTROLLER))
            .expect("Failed to initialize controller stable cell")
    );

    static DESCRIPTOR_ENCODING: RefCell<StableCell<Cbor<DescriptorEncoding>, Memory>> = RefCell::new(
        StableCell::init(get_memory(DESCRIPTOR_ENCODING_MEM_ID), Cbor(DescriptorEncoding::default()))
            .expect("Failed to initialize descriptor encoding stable cell")
    );

    static MIN_CYCLES_THRESHOLD: RefCell<StableCell<Cbor<u128>, Memory>> = RefCell::new(
        StableCell::init(get_memory(MIN_CYCLES_THRESHOLD_MEM_ID), Cbor(DEFAULT_MIN_CYCLES_THRESHOLD))
            .expect("Failed to initialize min cycles threshold stable cell")
    );
}

/// Write the configuration captured at install time.
/// Only `init` calls this; there is no endpoint that changes the controller.
pub fn init_config(
    controller: PrincipalId,
    encoding: DescriptorEncoding,
    min_cycles_threshold: u128,
) -> Result<(), RegistryError> {
    CONTROLLER.with(|cell| {
        cell.borrow_mut()
            .set(Cbor(controller))
            .map(|_| ())
            .map_err(|e| RegistryError::StorageError(format!("Failed to set controller: {:?}", e)))
    })?;
    DESCRIPTOR_ENCODING.with(|cell| {
        cell.borrow_mut()
            .set(Cbor(encoding))
            .map(|_| ())
            .map_err(|e| RegistryError::StorageError(format!("Failed to set descriptor encoding: {:?}", e)))
    })?;
    MIN_CYCLES_THRESHOLD.with(|cell| {
        cell.borrow_mut()
            .set(Cbor(min_cycles_threshold))
            .map(|_| ())
            .map_err(|e| RegistryError::StorageError(format!("Failed to set min cycles threshold: {:?}", e)))
    })?;
    crate::log!(
        "Configuration initialized: Controller={}, Encoding={:?}, Threshold={}",
        controller,
        encoding,
        min_cycles_threshold
    );
    Ok(())
}

pub fn get_controller() -> PrincipalId {
    CONTROLLER.with(|cell| cell.borrow().get().0)
}

pub fn get_descriptor_encoding() -> DescriptorEncoding {
    DESCRIPTOR_ENCODING.with(|cell| cell.borrow().get().0)
}

pub fn get_min_cycles_threshold() -> u128 {
    MIN_CYCLES_THRESHOLD.with(|cell| cell.borrow().get().0)
}
