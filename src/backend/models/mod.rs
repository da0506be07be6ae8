pub mod common;
pub mod entry;
pub mod event;
pub mod init;
pub mod record;

// Re-export common types/enums for easier access
pub use common::*;
pub use entry::RegistryEntry;
pub use event::{EventKind, RegistryEvent};
pub use init::InitArgs;
pub use record::{Label, Record, LABEL_CAPACITY};
