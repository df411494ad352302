mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use evtracker_core::{load_config_or_default, validate_config, PokedexError, TrackerError};

use cli::Cli;
use commands::App;

fn main() {
    init_logging();

    if let Err(e) = run() {
        for line in failure_message(&e) {
            println!("{}", line);
        }
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(path) = cli.tracker {
        config.tracker.path = path;
    }
    if let Some(path) = cli.pokedex {
        config.pokedex.path = path;
    }
    validate_config(&config).context("Configuration validation failed")?;

    debug!("Tracker file: {:?}", config.tracker.path);
    debug!("Pokedex database: {:?}", config.pokedex.path);

    App::new(config).execute(cli.command)
}

/// Lines printed for a failed command.
fn failure_message(e: &anyhow::Error) -> Vec<String> {
    let pokedex_error = e.downcast_ref::<PokedexError>().or_else(|| {
        match e.downcast_ref::<TrackerError>() {
            Some(TrackerError::Pokedex(inner)) => Some(inner),
            _ => None,
        }
    });

    if let Some(err) = pokedex_error {
        if let Some(identifier) = err.identifier() {
            let mut lines = vec![format!("No match found for '{}'.", identifier)];
            if matches!(err, PokedexError::AmbiguousSpecies { .. }) {
                lines.push("Did you mean:".to_string());
                lines.extend(err.matches().iter().map(|species| format!("  {}", species.name)));
            }
            return lines;
        }
    }

    match e.downcast_ref::<TrackerError>() {
        Some(TrackerError::NoActivePokemon) => vec![
            "No tracked Pokemon is marked as active.".to_string(),
            "Set an active pokemon using the 'active --switch' command.".to_string(),
        ],
        Some(TrackerError::NoTrackedPokemon { id }) => {
            vec![format!("No tracked Pokemon with id '{}' was found.", id)]
        }
        _ => vec![format!("Error: {:#}", e)],
    }
}
