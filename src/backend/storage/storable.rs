// src/backend/storage/storable.rs
use ic_stable_structures::{storable::Bound, Storable};
use serde::{de::DeserializeOwned, Serialize};
use std::any::type_name;
use std::borrow::Cow;

/// Wraps any serde type to make it Storable using CBOR encoding.
///
/// Encoding failures panic, which traps and rolls back the whole call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cbor<T>(pub T)
where
    T: Serialize + DeserializeOwned;

impl<T> Cbor<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Storable for Cbor<T>
where
    T: Serialize + DeserializeOwned,
{
    fn to_bytes(&self) -> Cow<'_, [u8]> {
        let mut writer = vec![];
        if let Err(e) = ciborium::ser::into_writer(&self.0, &mut writer) {
            panic!("CBOR encoding of {} failed: {}", type_name::<T>(), e);
        }
        Cow::Owned(writer)
    }

    fn from_bytes(bytes: Cow<'_, [u8]>) -> Self {
        match ciborium::de::from_reader(bytes.as_ref()) {
            Ok(value) => Cbor(value),
            Err(e) => panic!("CBOR decoding of {} failed: {}", type_name::<T>(), e),
        }
    }

    // Records carry free text, so no fixed bound applies.
    const BOUND: Bound = Bound::Unbounded;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, Record, RegistryEntry};
    use candid::Principal;

    #[test]
    fn entry_survives_storable_encoding() {
        let entry = RegistryEntry::minted(
            Principal::from_slice(&[7]),
            Record {
                last_modified: 1_700_000_000,
                label: Label::new("Resume"),
                description: "My resume".to_string(),
                file_ref: "https://x/resume.pdf".to_string(),
                image_ref: "https://x/img.jpg".to_string(),
            },
        );
        let bytes = Cbor(entry.clone()).to_bytes().into_owned();
        let decoded: Cbor<RegistryEntry> = Cbor::from_bytes(Cow::Owned(bytes));
        assert_eq!(decoded.0, entry);
    }
}
