//! High-level vault operations used by CLI commands.
//!
//! `Vault` owns the newest-first collection of entries and the store it
//! was loaded from. Every mutation rewrites the whole slot.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, VaultError};

use super::entry::{to_stored_precision, VaultEntry};
use super::storage::KeyValueStore;

/// What to do when the stored collection cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Fail with `PersistenceReadError` and leave the slot untouched.
    #[default]
    Error,
    /// Copy the unreadable slot to a backup slot and start empty.
    Reset,
}

/// Read the collection stored in `slot`.
///
/// A slot that was never written yields an empty collection. A slot
/// that does not parse yields `PersistenceReadError`.
pub fn load_entries<S: KeyValueStore + ?Sized>(store: &S, slot: &str) -> Result<Vec<VaultEntry>> {
    let Some(raw) = store.get(slot)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&raw)
        .map_err(|e| VaultError::PersistenceReadError(format!("slot '{slot}': {e}")))
}

/// Pick an unused slot name for a copy of an unreadable `slot`.
///
/// `<slot>.corrupt-<UTC timestamp with milliseconds>`, with `-1`, `-2`, ...
/// appended if that name is already taken.
fn backup_slot<S: KeyValueStore + ?Sized>(store: &S, slot: &str) -> Result<String> {
    let base = format!("{slot}.corrupt-{}", Utc::now().format("%Y%m%dT%H%M%S%3f"));
    let mut candidate = base.clone();
    let mut n = 0u32;
    while store.get_bytes(&candidate)?.is_some() {
        n += 1;
        candidate = format!("{base}-{n}");
    }
    Ok(candidate)
}

/// The vault handle. Create one with `Vault::load` or
/// `Vault::load_with_policy`, then use its methods to manage entries.
pub struct Vault<S: KeyValueStore> {
    store: S,

    /// Slot holding the serialized collection.
    slot: String,

    /// Newest first.
    entries: Vec<VaultEntry>,
}

impl<S: KeyValueStore> Vault<S> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Load the vault from `slot`, failing on unreadable data.
    pub fn load(store: S, slot: &str) -> Result<Self> {
        Self::load_with_policy(store, slot, CorruptPolicy::Error)
    }

    /// Load the vault from `slot`, handling unreadable data per `policy`.
    ///
    /// With `CorruptPolicy::Reset`, the raw bytes are copied to
    /// `<slot>.corrupt-<timestamp>` before the slot is cleared, so nothing
    /// is lost.
    pub fn load_with_policy(mut store: S, slot: &str, policy: CorruptPolicy) -> Result<Self> {
        let entries = match load_entries(&store, slot) {
            Ok(entries) => entries,
            Err(VaultError::PersistenceReadError(reason)) if policy == CorruptPolicy::Reset => {
                let backup = backup_slot(&store, slot)?;
                if let Some(raw) = store.get_bytes(slot)? {
                    store.set_bytes(&backup, &raw)?;
                }
                store.remove(slot)?;
                tracing::warn!(%slot, %backup, %reason, "stored vault unreadable, starting empty");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(%slot, entries = entries.len(), "vault loaded");
        Ok(Self {
            store,
            slot: slot.to_string(),
            entries,
        })
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Save a new entry at the front of the collection and persist.
    ///
    /// Fails with `InvalidEntry` if `secret` is empty or `label` is blank.
    /// The label is stored trimmed.
    pub fn save(&mut self, secret: &str, label: &str) -> Result<VaultEntry> {
        let label = label.trim();
        if secret.is_empty() {
            return Err(VaultError::InvalidEntry("secret cannot be empty".into()));
        }
        if label.is_empty() {
            return Err(VaultError::InvalidEntry("label cannot be empty".into()));
        }

        let entry = VaultEntry {
            id: self.fresh_id(),
            secret: secret.to_string(),
            label: label.to_string(),
            created_at: to_stored_precision(Utc::now()),
        };

        self.entries.insert(0, entry.clone());
        if let Err(e) = self.persist() {
            self.entries.remove(0);
            return Err(e);
        }

        tracing::info!(id = %entry.id, label = %entry.label, "entry saved");
        Ok(entry)
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    ///
    /// The store is only rewritten when an entry was actually removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        let removed = self.entries.remove(index);
        if let Err(e) = self.persist() {
            self.entries.insert(index, removed);
            return Err(e);
        }

        tracing::info!(id = %removed.id, label = %removed.label, "entry deleted");
        Ok(true)
    }

    /// Entries whose label contains `query`, ignoring case, in vault order.
    ///
    /// An empty query matches every entry.
    pub fn search(&self, query: &str) -> Vec<&VaultEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Look up an entry by its exact id.
    pub fn get(&self, id: &str) -> Option<&VaultEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look up an entry by its full id or a unique id prefix.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&VaultEntry> {
        if id_or_prefix.is_empty() {
            return Err(VaultError::EntryNotFound(String::new()));
        }
        if let Some(entry) = self.get(id_or_prefix) {
            return Ok(entry);
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry),
            (Some(_), Some(_)) => Err(VaultError::AmbiguousId(id_or_prefix.to_string())),
            (None, _) => Err(VaultError::EntryNotFound(id_or_prefix.to_string())),
        }
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize the full collection and replace the slot with it.
    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| VaultError::SerializationError(format!("entries: {e}")))?;
        self.store.set(&self.slot, &json)
    }

    /// Draw ids until one is not already in the collection.
    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// All entries, newest first.
    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the slot name the vault is stored under.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}
