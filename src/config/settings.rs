use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};
use crate::generator::CharClasses;
use crate::vault::{CorruptPolicy, DEFAULT_SLOT};

/// User configuration, loaded from `<data_dir>/config.toml`.
///
/// Every field has a sensible default so SecureVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Password length used when `--length` is not given.
    #[serde(default = "default_length")]
    pub default_length: usize,

    /// Smallest length the CLI accepts.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Largest length the CLI accepts.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Character classes enabled unless turned off on the command line.
    #[serde(default = "default_true")]
    pub uppercase: bool,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_true")]
    pub digits: bool,
    #[serde(default = "default_true")]
    pub symbols: bool,

    /// Storage slot holding the vault.
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Seconds after which a copied secret is cleared (0 = never).
    #[serde(default)]
    pub clipboard_clear_secs: u64,

    /// What to do when the stored vault cannot be read.
    #[serde(default)]
    pub on_corrupt: CorruptPolicy,

    /// Log filter used when `SECUREVAULT_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_length() -> usize {
    16
}

fn default_min_length() -> usize {
    8
}

fn default_max_length() -> usize {
    32
}

fn default_true() -> bool {
    true
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            min_length: default_min_length(),
            max_length: default_max_length(),
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            slot: default_slot(),
            clipboard_clear_secs: 0,
            on_corrupt: CorruptPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the data directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Load settings from `<data_dir>/config.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed or is inconsistent, an
    /// error is returned.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(VaultError::ConfigError(
                "min_length must be at least 1".into(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(VaultError::ConfigError(format!(
                "min_length ({}) is larger than max_length ({})",
                self.min_length, self.max_length
            )));
        }
        self.check_length(self.default_length)
            .map_err(|_| VaultError::ConfigError(format!(
                "default_length ({}) must be between {} and {}",
                self.default_length, self.min_length, self.max_length
            )))?;
        crate::vault::storage::validate_key(&self.slot)
            .map_err(|e| VaultError::ConfigError(e.to_string()))
    }

    /// Ensure `length` lies within the configured bounds.
    pub fn check_length(&self, length: usize) -> Result<()> {
        if length < self.min_length || length > self.max_length {
            return Err(VaultError::CommandFailed(format!(
                "length must be between {} and {}",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }

    /// The character classes enabled by default.
    pub fn classes(&self) -> CharClasses {
        CharClasses::from_flags(self.uppercase, self.lowercase, self.digits, self.symbols)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
