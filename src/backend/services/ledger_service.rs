// src/backend/services/ledger_service.rs
//! Ownership ledger: who holds each record and who may act for them.
//!
//! The rules follow the usual non-fungible asset model. A record's holder,
//! the single delegate approved for that record, or an operator the holder
//! approved for all records may transfer or destroy it.

use crate::{
    error::RegistryError,
    metrics,
    models::{
        common::{PrincipalId, RecordId, Timestamp},
        EventKind, Record, RegistryEntry,
    },
    storage::{events, operators, records},
};
use candid::Principal;

fn load_entry(record_id: RecordId) -> Result<RegistryEntry, RegistryError> {
    records::get_entry(record_id).ok_or(RegistryError::NotFound(record_id))
}

/// Holder, delegate or operator. The anonymous principal never qualifies.
fn is_authorized(entry: &RegistryEntry, principal: &PrincipalId) -> bool {
    if *principal == Principal::anonymous() {
        return false;
    }
    entry.holder == *principal
        || entry.approved.as_ref() == Some(principal)
        || operators::is_operator(&entry.holder, principal)
}

/// Returns the holder of `record_id`.
pub fn holder_of(record_id: RecordId) -> Result<PrincipalId, RegistryError> {
    load_entry(record_id).map(|entry| entry.holder)
}

/// Returns the delegate approved for `record_id`, if any.
pub fn get_approved(record_id: RecordId) -> Result<Option<PrincipalId>, RegistryError> {
    load_entry(record_id).map(|entry| entry.approved)
}

pub fn is_approved_for_all(holder: &PrincipalId, operator: &PrincipalId) -> bool {
    operators::is_operator(holder, operator)
}

/// Whether `principal` may transfer or destroy `record_id`.
pub fn is_holder_or_approved(
    record_id: RecordId,
    principal: &PrincipalId,
) -> Result<bool, RegistryError> {
    load_entry(record_id).map(|entry| is_authorized(&entry, principal))
}

/// Establishes `holder` for a new record together with its metadata.
/// Callers must have checked that `record_id` is free.
pub(crate) fn mint(
    record_id: RecordId,
    holder: PrincipalId,
    record: Record,
    now: Timestamp,
) -> Result<(), RegistryError> {
    records::insert_entry(record_id, RegistryEntry::minted(holder, record));
    events::append_event(
        now,
        EventKind::Transfer {
            record_id,
            from: None,
            to: Some(holder),
        },
    )?;
    Ok(())
}

/// Removes the record and its ownership in one step.
pub fn burn(
    record_id: RecordId,
    caller: PrincipalId,
    now: Timestamp,
) -> Result<RegistryEntry, RegistryError> {
    if !is_holder_or_approved(record_id, &caller)? {
        return Err(RegistryError::Unauthorized(format!(
            "Caller {} may not destroy record {}",
            caller, record_id
        )));
    }

    let removed = records::remove_entry(record_id).ok_or(RegistryError::NotFound(record_id))?;
    events::append_event(
        now,
        EventKind::Transfer {
            record_id,
            from: Some(removed.holder),
            to: None,
        },
    )?;
    metrics::record_destroy()?;
    crate::log!("Record {} destroyed by {}", record_id, caller);
    Ok(removed)
}

/// Moves `record_id` to `to`. Clears the record's delegate.
pub fn transfer(
    record_id: RecordId,
    to: PrincipalId,
    caller: PrincipalId,
    now: Timestamp,
) -> Result<(), RegistryError> {
    if !is_holder_or_approved(record_id, &caller)? {
        return Err(RegistryError::Unauthorized(format!(
            "Caller {} may not transfer record {}",
            caller, record_id
        )));
    }
    if to == Principal::anonymous() {
        return Err(RegistryError::InvalidInput(
            "Cannot transfer a record to the anonymous principal".to_string(),
        ));
    }

    let mut entry = load_entry(record_id)?;
    let from = entry.holder;
    entry.holder = to;
    entry.approved = None;
    records::insert_entry(record_id, entry);
    events::append_event(
        now,
        EventKind::Transfer {
            record_id,
            from: Some(from),
            to: Some(to),
        },
    )?;
    metrics::record_transfer()?;
    crate::log!("Record {} transferred from {} to {} by {}", record_id, from, to, caller);
    Ok(())
}

/// Sets or clears the single-record delegate. Holder or operator only.
pub fn approve(
    record_id: RecordId,
    delegate: Option<PrincipalId>,
    caller: PrincipalId,
    now: Timestamp,
) -> Result<(), RegistryError> {
    let mut entry = load_entry(record_id)?;
    if entry.holder != caller && !operators::is_operator(&entry.holder, &caller) {
        return Err(RegistryError::Unauthorized(format!(
            "Caller {} may not approve delegates for record {}",
            caller, record_id
        )));
    }
    if delegate == Some(Principal::anonymous()) {
        return Err(RegistryError::InvalidInput(
            "The anonymous principal cannot be approved as a delegate".to_string(),
        ));
    }
    if delegate == Some(entry.holder) {
        return Err(RegistryError::InvalidInput(
            "The holder cannot be approved as its own delegate".to_string(),
        ));
    }

    entry.approved = delegate;
    let holder = entry.holder;
    records::insert_entry(record_id, entry);
    events::append_event(
        now,
        EventKind::Approval {
            record_id,
            holder,
            approved: delegate,
        },
    )?;
    Ok(())
}

/// Grants or revokes `operator` rights over all of the caller's records.
pub fn set_approval_for_all(
    operator: PrincipalId,
    approved: bool,
    caller: PrincipalId,
    now: Timestamp,
) -> Result<(), RegistryError> {
    if operator == caller {
        return Err(RegistryError::InvalidInput(
            "Cannot set approval for all on oneself".to_string(),
        ));
    }
    if caller == Principal::anonymous() {
        return Err(RegistryError::Unauthorized(
            "Anonymous callers cannot grant operators".to_string(),
        ));
    }
    if operator == Principal::anonymous() {
        return Err(RegistryError::InvalidInput(
            "The anonymous principal cannot be an operator".to_string(),
        ));
    }

    if approved {
        operators::grant_operator(caller, operator, now);
    } else {
        operators::revoke_operator(caller, operator);
    }
    events::append_event(
        now,
        EventKind::ApprovalForAll {
            holder: caller,
            operator,
            approved,
        },
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;

    const NOW: Timestamp = 1_700_000_000;

    fn principal(id: u8) -> PrincipalId {
        Principal::from_slice(&[id])
    }

    fn minted(record_id: RecordId, holder: PrincipalId) {
        let record = Record {
            last_modified: NOW,
            label: Label::new("Cover letter"),
            description: String::new(),
            file_ref: String::new(),
            image_ref: String::new(),
        };
        mint(record_id, holder, record, NOW).unwrap();
    }

    #[test]
    fn holder_of_missing_record_is_not_found() {
        assert_eq!(holder_of(9), Err(RegistryError::NotFound(9)));
        assert_eq!(get_approved(9), Err(RegistryError::NotFound(9)));
        assert_eq!(
            is_holder_or_approved(9, &principal(1)),
            Err(RegistryError::NotFound(9))
        );
    }

    #[test]
    fn transfer_moves_holder_and_clears_delegate() {
        let (alice, bob, carol) = (principal(1), principal(2), principal(3));
        minted(1, alice);
        approve(1, Some(carol), alice, NOW).unwrap();

        transfer(1, bob, carol, NOW + 1).unwrap();
        assert_eq!(holder_of(1), Ok(bob));
        assert_eq!(get_approved(1), Ok(None));
        assert_eq!(is_holder_or_approved(1, &carol), Ok(false));
        assert_eq!(crate::storage::get_metrics().transfers, 1);
    }

    #[test]
    fn strangers_cannot_transfer_or_approve() {
        let (alice, mallory) = (principal(1), principal(4));
        minted(1, alice);

        assert!(matches!(
            transfer(1, mallory, mallory, NOW),
            Err(RegistryError::Unauthorized(_))
        ));
        assert!(matches!(
            approve(1, Some(mallory), mallory, NOW),
            Err(RegistryError::Unauthorized(_))
        ));
        assert_eq!(holder_of(1), Ok(alice));
    }

    #[test]
    fn transfer_to_anonymous_is_rejected() {
        let alice = principal(1);
        minted(1, alice);
        assert!(matches!(
            transfer(1, Principal::anonymous(), alice, NOW),
            Err(RegistryError::InvalidInput(_))
        ));
        assert_eq!(holder_of(1), Ok(alice));
    }

    #[test]
    fn operator_acts_for_every_record_of_the_holder() {
        let (alice, operator) = (principal(1), principal(5));
        minted(1, alice);
        minted(2, alice);

        set_approval_for_all(operator, true, alice, NOW).unwrap();
        assert!(is_approved_for_all(&alice, &operator));
        assert_eq!(is_holder_or_approved(1, &operator), Ok(true));
        assert_eq!(is_holder_or_approved(2, &operator), Ok(true));

        // Operators may name single-record delegates too.
        approve(2, Some(principal(6)), operator, NOW).unwrap();
        assert_eq!(get_approved(2), Ok(Some(principal(6))));

        set_approval_for_all(operator, false, alice, NOW).unwrap();
        assert!(!is_approved_for_all(&alice, &operator));
        assert_eq!(is_holder_or_approved(1, &operator), Ok(false));
    }

    #[test]
    fn approval_for_all_on_self_is_rejected() {
        let alice = principal(1);
        assert!(matches!(
            set_approval_for_all(alice, true, alice, NOW),
            Err(RegistryError::InvalidInput(_))
        ));
    }

    #[test]
    fn anonymous_operator_is_rejected() {
        let alice = principal(1);
        minted(1, alice);

        assert!(matches!(
            set_approval_for_all(Principal::anonymous(), true, alice, NOW),
            Err(RegistryError::InvalidInput(_))
        ));
        assert!(!is_approved_for_all(&alice, &Principal::anonymous()));
        assert!(matches!(
            burn(1, Principal::anonymous(), NOW),
            Err(RegistryError::Unauthorized(_))
        ));
        assert_eq!(holder_of(1), Ok(alice));
    }

    #[test]
    fn anonymous_delegate_is_rejected() {
        let alice = principal(1);
        minted(2, alice);

        assert!(matches!(
            approve(2, Some(Principal::anonymous()), alice, NOW),
            Err(RegistryError::InvalidInput(_))
        ));
        assert_eq!(get_approved(2), Ok(None));
        assert!(matches!(
            transfer(2, principal(9), Principal::anonymous(), NOW),
            Err(RegistryError::Unauthorized(_))
        ));
        assert_eq!(
            is_holder_or_approved(2, &Principal::anonymous()),
            Ok(false)
        );
        assert_eq!(holder_of(2), Ok(alice));
    }

    #[test]
    fn holder_cannot_be_own_delegate() {
        let alice = principal(1);
        minted(1, alice);
        assert!(matches!(
            approve(1, Some(alice), alice, NOW),
            Err(RegistryError::InvalidInput(_))
        ));
    }

    #[test]
    fn burn_requires_authorization_and_removes_everything() {
        let (alice, delegate, mallory) = (principal(1), principal(2), principal(4));
        minted(1, alice);
        approve(1, Some(delegate), alice, NOW).unwrap();

        assert!(matches!(
            burn(1, mallory, NOW),
            Err(RegistryError::Unauthorized(_))
        ));
        assert!(records::contains_entry(1));

        let removed = burn(1, delegate, NOW).unwrap();
        assert_eq!(removed.holder, alice);
        assert!(!records::contains_entry(1));
        assert_eq!(holder_of(1), Err(RegistryError::NotFound(1)));
        assert_eq!(burn(1, alice, NOW), Err(RegistryError::NotFound(1)));
    }

    #[test]
    fn ledger_changes_are_journaled() {
        let (alice, bob) = (principal(1), principal(2));
        minted(1, alice);
        transfer(1, bob, alice, NOW + 1).unwrap();

        let kinds: Vec<EventKind> = events::events_since(0, 10)
            .into_iter()
            .map(|event| event.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Transfer { record_id: 1, from: None, to: Some(alice) },
                EventKind::Transfer { record_id: 1, from: Some(alice), to: Some(bob) },
            ]
        );
    }
}
