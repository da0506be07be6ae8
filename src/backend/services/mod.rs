pub mod descriptor;
pub mod ledger_service;
pub mod registry_service;
