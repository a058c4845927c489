//! Local key-value storage backing the vault.
//!
//! The vault lives in a single named slot. `FileStore` keeps each slot in
//! `<dir>/<key>.json` and replaces it atomically on every write;
//! `MemoryStore` keeps slots in a map and is used by tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, VaultError};

/// Default slot name for the vault collection.
pub const DEFAULT_SLOT: &str = "passwordVault";

/// A string-to-string store with named slots.
pub trait KeyValueStore {
    /// Read a slot. Returns `None` if it has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the whole contents of a slot.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a slot. Returns `true` if it existed.
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// Read a slot as raw bytes, whether or not it is valid UTF-8.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get(key)?.map(String::into_bytes))
    }

    /// Replace a slot with raw bytes.
    fn set_bytes(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| VaultError::SerializationError(format!("slot '{key}': {e}")))?;
        self.set(key, text)
    }
}

/// Validate that a slot key is safe to use as a file name.
///
/// Allowed: ASCII letters, digits, underscores, hyphens, periods.
/// Must be non-empty, at most 128 characters, and not start with a period.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(VaultError::InvalidKey("key cannot be empty".into()));
    }
    if key.len() > 128 {
        return Err(VaultError::InvalidKey(
            "key cannot exceed 128 characters".into(),
        ));
    }
    if key.starts_with('.') {
        return Err(VaultError::InvalidKey(format!(
            "key '{key}' cannot start with a period"
        )));
    }
    if !key
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.')
    {
        return Err(VaultError::InvalidKey(format!(
            "key '{key}' contains invalid characters — only ASCII letters, digits, underscores, hyphens, and periods are allowed"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Slots stored as JSON files in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` as the storage directory, creating it if needed.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Path of the file holding `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    /// Contents that are not valid UTF-8 are reported as
    /// `PersistenceReadError`; use `get_bytes` to read them anyway.
    fn get(&self, key: &str) -> Result<Option<String>> {
        let Some(bytes) = self.get_bytes(key)? else {
            return Ok(None);
        };
        String::from_utf8(bytes).map(Some).map_err(|e| {
            VaultError::PersistenceReadError(format!("slot '{key}' is not valid UTF-8: {e}"))
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_bytes(key, value.as_bytes())
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(&path)?))
    }

    /// Write to a temp file in the same directory, then rename it over the
    /// slot so readers never see a half-written file.
    fn set_bytes(&mut self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        let path = self.slot_path(key);
        let tmp_path = self.dir.join(format!(".{key}.json.tmp"));

        write_private(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        tracing::debug!(slot = key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }
}

/// Create (or truncate) a file readable only by the owner.
fn write_private(path: &Path, data: &[u8]) -> Result<()> {
    use std::io::Write;

    #[cfg(unix)]
    let mut file = {
        use std::os::unix::fs::OpenOptionsExt;
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
    };

    #[cfg(not(unix))]
    let mut file = fs::File::create(path)?;

    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory slots. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.slots.remove(key).is_some())
    }
}
