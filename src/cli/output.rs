//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::generator::Rating;
use crate::vault::VaultEntry;

/// Width of the strength bar in cells.
const BAR_WIDTH: usize = 20;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Render a strength score as a bar, e.g. `[#########-----------]`.
pub fn strength_bar(score: u8) -> String {
    let filled = usize::from(score) * BAR_WIDTH / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Print the strength line shown under a generated password.
pub fn print_strength(score: u8) {
    let rating = Rating::from_score(score);
    let bar = strength_bar(score);
    let bar = match rating {
        Rating::Weak => style(bar).red(),
        Rating::Fair => style(bar).yellow(),
        Rating::Good => style(bar).cyan(),
        Rating::Strong => style(bar).green(),
    };
    println!("Strength {bar} {score}% ({rating})");
}

/// Print a table of entries (ID, Account, Created). Secrets are not shown.
pub fn print_entries_table(entries: &[&VaultEntry]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Account", "Created"]);

    for e in entries {
        table.add_row(vec![
            e.short_id().to_string(),
            e.label.clone(),
            e.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}
