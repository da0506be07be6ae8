// src/backend/error.rs
use crate::models::common::RecordId;
use candid::CandidType;
use serde::Deserialize;
use thiserror::Error;

#[derive(CandidType, Deserialize, Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Canister cycle balance too low for operation")]
    CycleLow,
}
