use thiserror::Error;

/// All errors that can occur in SecureVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Generator errors ---
    #[error("Please select at least one option")]
    NoCharacterClassSelected,

    #[error("Password length must be greater than zero")]
    InvalidLength,

    // --- Vault errors ---
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Could not read stored vault: {0}")]
    PersistenceReadError(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    #[error("Id prefix '{0}' matches more than one entry — use more characters")]
    AmbiguousId(String),

    // --- Storage errors ---
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    // --- Clipboard errors ---
    #[error("Failed to copy to clipboard: {0}")]
    ClipboardWriteError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for SecureVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
