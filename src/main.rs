//! Main entry point for the Matboj leaderboard
//!
//! Loads configuration, builds the leaderboard from a roster or a saved game
//! state, and runs the interactive console on stdin/stdout.

use anyhow::{Context, Result};
use clap::Parser;
use matboj::command::Shell;
use matboj::config::AppConfig;
use matboj::roster::load_roster;
use matboj::storage::JsonFileStorage;
use matboj::{MatbojFormula, Matboj, RankEngine, RatingCalculator};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Matboj - leaderboard for head-to-head competitions
#[derive(Parser)]
#[command(
    name = "matboj",
    version,
    about = "Keep a Matboj leaderboard from the console",
    long_about = "Matboj keeps a ranked roster of participants, adjusts ranks after each reported \
                 match, and can retract any past match while replaying the matches reported after it."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Roster file override
    #[arg(short, long, value_name = "FILE", help = "Roster file, one name per line")]
    roster: Option<PathBuf>,

    /// State file override
    #[arg(short, long, value_name = "FILE", help = "Game state JSON file")]
    state: Option<PathBuf>,

    /// Resume from the state file
    #[arg(long, help = "Start from the saved game state instead of the roster")]
    resume: bool,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Disable saving after every match
    #[arg(long, help = "Only save on `save` and `quit`")]
    no_autosave: bool,

    /// Disable colors
    #[arg(long, help = "Print without ANSI colors")]
    no_color: bool,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and roster, then exit)
    #[arg(long, help = "Validate configuration and roster and exit")]
    dry_run: bool,
}

/// Initialize structured logging on stderr with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }
    if let Some(roster) = &args.roster {
        config.storage.roster_path = roster.clone();
    }
    if let Some(state) = &args.state {
        config.storage.state_path = state.clone();
    }
    if args.no_autosave {
        config.storage.autosave = false;
    }
    if args.no_color {
        config.display.color = false;
    }

    matboj::config::validate_config(&config)?;
    Ok(config)
}

/// Build the session from the saved state or from the roster
fn build_session(config: &AppConfig, resume: bool) -> Result<Matboj> {
    let formula = MatbojFormula::new(config.rating.clone())?;
    let storage = Arc::new(JsonFileStorage::new(&config.storage.state_path));

    if resume {
        return Matboj::resume(storage, formula, config.storage.autosave).with_context(|| {
            format!(
                "Failed to resume from {}",
                config.storage.state_path.display()
            )
        });
    }

    let names = load_roster(&config.storage.roster_path)?;
    info!(
        "Starting {} participants at rank {}",
        names.len(),
        formula.initial_rank()
    );
    let engine = RankEngine::from_roster(names, formula).with_context(|| {
        format!(
            "Invalid roster {}",
            config.storage.roster_path.display()
        )
    })?;

    Ok(Matboj::new(engine, storage, config.storage.autosave))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} {} - roster: {}, state: {}, autosave: {}",
        config.service.name,
        matboj::VERSION,
        config.storage.roster_path.display(),
        config.storage.state_path.display(),
        config.storage.autosave
    );

    let session = match build_session(&config, args.resume) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to start: {:#}", e);
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        println!(
            "Configuration valid: {} participants, {} matches",
            session.engine().store().len(),
            session.engine().ledger().len()
        );
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(session, stdin.lock(), stdout.lock(), &config.display);
    shell.run().context("Console I/O failed")?;

    info!("{} stopped", config.service.name);
    Ok(())
}
