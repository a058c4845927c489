//! Vault module — the saved credential collection.
//!
//! This module provides:
//! - The `VaultEntry` record (`entry`)
//! - Named-slot key-value storage, file-backed and in-memory (`storage`)
//! - High-level `Vault` for saving, deleting and searching entries (`store`)

pub mod entry;
pub mod storage;
pub mod store;

// Re-export the most commonly used items.
pub use entry::VaultEntry;
pub use storage::{FileStore, KeyValueStore, MemoryStore, DEFAULT_SLOT};
pub use store::{load_entries, CorruptPolicy, Vault};
