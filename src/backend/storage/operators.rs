// src/backend/storage/operators.rs
use crate::models::common::{PrincipalId, Timestamp};
use crate::storage::memory::{get_operators_memory, Memory};
use ic_stable_structures::StableBTreeMap;
use std::cell::RefCell;

thread_local! {
    /// Blanket approvals: Key = (holder, operator), Value = time the approval was granted.
    /// Kept apart from the record entries; an operator approval outlives any single record.
    static OPERATORS: RefCell<StableBTreeMap<(PrincipalId, PrincipalId), Timestamp, Memory>> = RefCell::new(
        StableBTreeMap::init(get_operators_memory())
    );
}

pub fn grant_operator(holder: PrincipalId, operator: PrincipalId, granted_at: Timestamp) {
    OPERATORS.with(|map_ref| {
        map_ref.borrow_mut().insert((holder, operator), granted_at);
    });
}

pub fn revoke_operator(holder: PrincipalId, operator: PrincipalId) {
    OPERATORS.with(|map_ref| {
        map_ref.borrow_mut().remove(&(holder, operator));
    });
}

pub fn is_operator(holder: &PrincipalId, operator: &PrincipalId) -> bool {
    OPERATORS.with(|map_ref| map_ref.borrow().contains_key(&(*holder, *operator)))
}
