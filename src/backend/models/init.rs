// src/backend/models/init.rs
use crate::models::common::DescriptorEncoding;
use candid::CandidType;
use serde::Deserialize;

#[derive(CandidType, Deserialize, Debug, Default)]
pub struct InitArgs {
    pub descriptor_encoding: Option<DescriptorEncoding>,
    pub min_cycles_threshold: Option<u128>,
}
