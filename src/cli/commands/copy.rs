//! `securevault copy` — put a saved password on the clipboard.

use crate::cli::{copy_to_clipboard, open_vault, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `copy` command.
pub fn execute(cli: &Cli, settings: &Settings, id: &str) -> Result<()> {
    let vault = open_vault(cli, settings)?;
    let entry = vault.resolve(id)?;

    tracing::debug!(id = %entry.id, "copying entry");
    copy_to_clipboard(&entry.secret, settings);

    Ok(())
}
