//! `securevault generate` — create a random password, then optionally
//! copy it and save it to the vault.

use console::style;

use crate::cli::output;
use crate::cli::{copy_to_clipboard, open_vault, Cli, GenerateArgs};
use crate::config::Settings;
use crate::errors::Result;
use crate::generator::{self, CharClass, CharClasses};

/// Execute the `generate` command.
pub fn execute(cli: &Cli, settings: &Settings, args: &GenerateArgs) -> Result<()> {
    let length = args.length.unwrap_or(settings.default_length);
    settings.check_length(length)?;

    let classes = enabled_classes(settings, args);
    let password = generator::generate(length, classes)?;

    println!("{}", style(&password).bold());
    output::print_strength(generator::strength(classes, length));

    if let Some(label) = &args.save {
        let mut vault = open_vault(cli, settings)?;
        let entry = vault.save(&password, label)?;
        output::success(&format!(
            "Saved to vault as '{}' ({} total)",
            entry.label,
            vault.len()
        ));
    }

    if args.copy {
        copy_to_clipboard(&password, settings);
    }

    Ok(())
}

/// Start from the configured classes and drop whatever the flags turn off.
pub fn enabled_classes(settings: &Settings, args: &GenerateArgs) -> CharClasses {
    let mut classes = settings.classes();
    for (off, class) in [
        (args.no_upper, CharClass::Uppercase),
        (args.no_lower, CharClass::Lowercase),
        (args.no_digits, CharClass::Digits),
        (args.no_symbols, CharClass::Symbols),
    ] {
        if off {
            classes.remove(class);
        }
    }
    classes
}
