//! `securevault save` — store a password under an account name.

use crate::cli::output;
use crate::cli::{open_vault, read_secret, Cli};
use crate::config::Settings;
use crate::errors::{Result, VaultError};

/// Execute the `save` command.
pub fn execute(cli: &Cli, settings: &Settings, label: &str, secret: Option<&str>) -> Result<()> {
    // Reject a blank label before prompting for anything.
    if label.trim().is_empty() {
        return Err(VaultError::InvalidEntry("label cannot be empty".into()));
    }

    let secret = read_secret(label, secret)?;

    let mut vault = open_vault(cli, settings)?;
    let entry = vault.save(&secret, label)?;

    output::success(&format!(
        "Saved '{}' ({} total)",
        entry.label,
        vault.len()
    ));
    output::tip(&format!("Copy it later with `securevault copy {}`", entry.short_id()));

    Ok(())
}
