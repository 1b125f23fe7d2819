use std::process::ExitCode;

use clap::Parser;
use mnemo_config::Config;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod profile;
pub mod prompts;
pub mod state;

use self::cli::{Cli, Commands};
use self::state::AppState;

#[cfg(test)]
mod tests {
    mod create_card_tests;
    mod fake_server;
    mod profile_tests;

    #[test]
    fn error_report_carries_full_chain() {
        let err = anyhow::anyhow!("deck was not found: Missing").context("Failed to add card to Anki");
        assert_eq!(
            super::error_report(&err),
            "Error: Failed to add card to Anki: deck was not found: Missing"
        );
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_report(&e));
            ExitCode::FAILURE
        }
    }
}

/// The one line printed for a failed run
fn error_report(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let root = profile::mnemo_root()?;
    let stored = profile::open_profile(&root, &cli.profile)?;
    let config = Config::from_profile(stored.clone());

    match cli.command {
        Commands::Add(args) => {
            let interactive = !args.no_input && atty::is(atty::Stream::Stdin);
            let state = AppState::new(config, interactive);
            commands::handle_card_creation(&state, args).await
        }
        Commands::Lookup { word, languages } => {
            let state = AppState::new(config, false);
            commands::handle_lookup(&state, &word, &languages).await
        }
        Commands::Languages => {
            commands::handle_languages();
            Ok(())
        }
        Commands::Models { provider } => {
            let state = AppState::new(config, false);
            commands::handle_models(&state, provider.as_deref())
        }
        Commands::Decks => {
            let state = AppState::new(config, false);
            commands::handle_decks(&state).await
        }
        Commands::Config { init, path } => commands::handle_config(&stored, &root, &cli.profile, init, path),
    }
}
