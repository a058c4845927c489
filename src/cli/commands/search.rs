//! `securevault search` — filter saved entries by account name.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `search` command.
pub fn execute(cli: &Cli, settings: &Settings, query: &str) -> Result<()> {
    let vault = open_vault(cli, settings)?;
    let hits = vault.search(query);

    if hits.is_empty() {
        output::info(&format!("No accounts match '{query}'."));
        return Ok(());
    }

    output::info(&format!("{} match(es) for '{query}'", hits.len()));
    output::print_entries_table(&hits);

    Ok(())
}
