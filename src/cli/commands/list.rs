//! `securevault list` — display all saved entries in a table.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, settings: &Settings) -> Result<()> {
    let vault = open_vault(cli, settings)?;

    if vault.is_empty() {
        output::info("No saved passwords yet.");
        output::tip("Run `securevault generate --save <ACCOUNT>` to add your first one.");
        return Ok(());
    }

    output::info(&format!("{} saved password(s)", vault.len()));
    let entries: Vec<_> = vault.entries().iter().collect();
    output::print_entries_table(&entries);

    Ok(())
}
