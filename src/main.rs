use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use tracing::warn;

use zentro::cli::args::{Cli, Commands, RunArgs};
use zentro::cli::commands;
use zentro::config::{Config, Paths};
use zentro::core::SystemClock;
use zentro::error::ZentroError;
use zentro::features::focus::{try_parse_minutes, FocusController, HistoryStore, RandomPicker};
use zentro::logging;
use zentro::storage::Database;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = e.downcast_ref::<ZentroError>().map_or(1, ZentroError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    // Completions don't need a data directory.
    if let Some(Commands::Completions { shell }) = cli.command {
        println!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let paths = Paths::resolve(cli.home.as_deref())?;
    paths.ensure_dirs()?;

    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("loading {}", paths.config_file.display()))?;
    config.general.color.apply();

    if let Err(e) = logging::init(&paths, &config.general.log_level) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }

    let db = Database::open(&paths)
        .with_context(|| format!("opening {}", paths.database.display()))?;
    let mut store = HistoryStore::new(db, config.history.max_sessions);

    let output = match cli.command {
        None => open_timer(store, RunArgs::default(), &config)?,
        Some(Commands::Run(args)) => open_timer(store, args, &config)?,
        Some(Commands::History { limit }) => commands::history(&store, limit, Local::now(), format)?,
        Some(Commands::Stats) => commands::stats(&store, Local::now(), format)?,
        Some(Commands::Clear { force }) => commands::clear(&mut store, force, format)?,
        Some(Commands::Completions { .. }) => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn open_timer(store: HistoryStore<Database>, args: RunArgs, config: &Config) -> Result<String> {
    let default_minutes = config.timer.default_minutes;
    let input = args.minutes.unwrap_or_else(|| default_minutes.to_string());
    if try_parse_minutes(&input).is_none() {
        warn!(input = %input, default_minutes, "minutes field is not a positive number, using default");
    }

    let controller = FocusController::new(store, input, Box::new(SystemClock), Box::new(RandomPicker))
        .with_default_minutes(default_minutes);
    zentro::tui::run(controller)?;
    Ok(String::new())
}
