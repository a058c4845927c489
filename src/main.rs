use clap::Parser;
use securevault::cli::{commands, data_dir, output, Cli, Commands};
use securevault::config::Settings;
use securevault::errors::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // These two never touch the data directory.
    match cli.command {
        Commands::Version => return commands::version::execute(),
        Commands::Completions { shell } => return commands::completions::execute(shell),
        _ => {}
    }

    let dir = data_dir(cli)?;
    let settings = Settings::load(&dir)?;
    securevault::logging::init_tracing(&dir, &settings.log_level);

    match cli.command {
        Commands::Generate(ref args) => commands::generate::execute(cli, &settings, args),
        Commands::Save {
            ref label,
            ref secret,
        } => commands::save::execute(cli, &settings, label, secret.as_deref()),
        Commands::List => commands::list::execute(cli, &settings),
        Commands::Search { ref query } => commands::search::execute(cli, &settings, query),
        Commands::Copy { ref id } => commands::copy::execute(cli, &settings, id),
        Commands::Delete { ref id, force } => {
            commands::delete::execute(cli, &settings, id, force)
        }
        Commands::Version | Commands::Completions { .. } => Ok(()),
    }
}
