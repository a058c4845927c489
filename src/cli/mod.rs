//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use zeroize::Zeroizing;

use crate::clipboard::{self, DelayedReset, SystemClipboard};
use crate::config::Settings;
use crate::errors::{Result, VaultError};
use crate::vault::{FileStore, Vault};

/// SecureVault CLI: password generator and local credential vault.
#[derive(Parser)]
#[command(
    name = "securevault",
    about = "Generate passwords and keep them in a local vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (default: ~/.securevault)
    #[arg(long, env = "SECUREVAULT_DIR", global = true)]
    pub data_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a random password
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Save a password to the vault
    Save {
        /// Account or app name (e.g. Email)
        label: String,
        /// Password to store (omit for interactive prompt)
        secret: Option<String>,
    },

    /// List saved passwords
    List,

    /// Search saved passwords by account name
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },

    /// Copy a saved password to the clipboard
    Copy {
        /// Entry id or a unique prefix of it
        id: String,
    },

    /// Delete a saved password
    Delete {
        /// Entry id or a unique prefix of it
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options for `securevault generate`.
#[derive(clap::Args, Debug, Default)]
pub struct GenerateArgs {
    /// Password length (default from config, usually 16)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy the password to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Save the password to the vault under this account name
    #[arg(short, long, value_name = "LABEL")]
    pub save: Option<String>,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the data directory.
///
/// Uses `--data-dir` / `SECUREVAULT_DIR` when given, otherwise
/// `%APPDATA%\SecureVault` on Windows and `~/.securevault` elsewhere.
pub fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(PathBuf::from(dir));
    }

    let (var, leaf) = if cfg!(windows) {
        ("APPDATA", "SecureVault")
    } else {
        ("HOME", ".securevault")
    };

    match std::env::var_os(var) {
        Some(base) if !base.is_empty() => Ok(PathBuf::from(base).join(leaf)),
        _ => Err(VaultError::ConfigError(format!(
            "cannot locate a data directory (${var} is not set) — pass --data-dir"
        ))),
    }
}

/// Open the vault in the data directory using the configured slot and
/// corruption policy.
pub fn open_vault(cli: &Cli, settings: &Settings) -> Result<Vault<FileStore>> {
    let store = FileStore::open(&data_dir(cli)?)?;
    Vault::load_with_policy(store, &settings.slot, settings.on_corrupt)
}

/// Read a secret to store, from one of three sources.
///
/// Returns `Zeroizing<String>` so the secret is wiped from memory on drop.
pub fn read_secret(label: &str, inline: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(v) = inline {
        // Source 1: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(Zeroizing::new(v.to_string()));
    }

    if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut *buf)?;
        return Ok(Zeroizing::new(strip_line_ending(&buf).to_string()));
    }

    // Source 3: Interactive secure prompt (default).
    let pw = dialoguer::Password::new()
        .with_prompt(format!("Password for {label}"))
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Drop a single trailing `\n` or `\r\n`. Other whitespace is part of
/// the secret.
fn strip_line_ending(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}

/// Copy `text` to the system clipboard.
///
/// Clipboard failures are logged and reported as a warning, never as an
/// error. When `clipboard_clear_secs` is set, this blocks until the
/// clipboard has been cleared.
pub fn copy_to_clipboard(text: &str, settings: &Settings) {
    let mut sink = match SystemClipboard::new() {
        Ok(sink) => sink,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            output::warning("Could not access the clipboard.");
            return;
        }
    };

    if !clipboard::copy_or_warn(&mut sink, text) {
        output::warning("Could not copy to the clipboard.");
        return;
    }
    output::success("Copied to clipboard");

    if settings.clipboard_clear_secs == 0 {
        return;
    }

    output::tip(&format!(
        "Clipboard will be cleared in {}s (Ctrl-C to keep it)",
        settings.clipboard_clear_secs
    ));
    let timer = DelayedReset::schedule(
        Duration::from_secs(settings.clipboard_clear_secs),
        clipboard::clear_system_clipboard,
    );
    if timer.wait() {
        output::info("Clipboard cleared.");
    }

    // The copied text is served by `sink` until here.
    drop(sink);
}
