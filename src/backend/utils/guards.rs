// src/backend/utils/guards.rs
use crate::error::RegistryError;
use crate::models::common::PrincipalId;
use crate::storage::config::{get_controller, get_min_cycles_threshold};
use candid::Principal;
use ic_cdk::api::canister_balance128;

/// Checks if the canister has sufficient cycles.
///
/// # Errors
///
/// Returns `RegistryError::CycleLow` if the balance is below the configured threshold.
pub fn check_cycles() -> Result<(), RegistryError> {
    let balance = canister_balance128();
    let threshold = get_min_cycles_threshold();
    if balance < threshold {
        crate::log!(
            "Cycle balance low: {} cycles, threshold: {}",
            balance,
            threshold
        );
        Err(RegistryError::CycleLow)
    } else {
        Ok(())
    }
}

/// Checks that `caller` is the registry controller.
///
/// # Errors
///
/// Returns `RegistryError::Unauthorized` for any other principal, and always
/// for the anonymous principal.
pub fn ensure_controller(caller: PrincipalId) -> Result<(), RegistryError> {
    if caller != Principal::anonymous() && caller == get_controller() {
        Ok(())
    } else {
        Err(RegistryError::Unauthorized(format!(
            "Caller {} is not the registry controller",
            caller
        )))
    }
}

/// Endpoint guard for controller-only methods.
pub fn controller_guard() -> Result<(), String> {
    ensure_controller(ic_cdk::caller()).map_err(|e| e.to_string())
}
