//! `securevault delete` — remove a saved entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::config::Settings;
use crate::errors::{Result, VaultError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, settings: &Settings, id: &str, force: bool) -> Result<()> {
    let mut vault = open_vault(cli, settings)?;

    let (full_id, label) = match vault.resolve(id) {
        Ok(entry) => (entry.id.clone(), entry.label.clone()),
        Err(VaultError::EntryNotFound(_)) => {
            output::info(&format!("No entry with id '{id}' — nothing deleted."));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete saved password for '{label}'?"))
            .default(false)
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    if vault.delete(&full_id)? {
        output::success(&format!("Deleted '{label}' ({} left)", vault.len()));
    }

    Ok(())
}
