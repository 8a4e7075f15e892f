/// Ascendion CLI - drive the playback model from the terminal
use ascendion_cli::{
    config::AppConfig,
    replay::{self, ReplayReport},
    CliError,
};
use ascendion_core::duration::{format_duration, parse_duration};
use ascendion_playback::{Page, TrackResolver};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ascendion")]
#[command(about = "AscendionPlay playback model tooling", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ASCENDION_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between "M:SS" strings and seconds
    Duration {
        #[command(subcommand)]
        action: DurationAction,
    },
    /// Resolve an item id against a catalog
    Resolve {
        /// Item id
        id: String,
        /// Catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Apply a gesture script to a fresh session
    Replay {
        /// Catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Gesture script JSON file
        #[arg(long)]
        script: PathBuf,
        /// Page to start on
        #[arg(long, default_value = "home")]
        page: Page,
        /// Seed for placeholder durations
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
enum DurationAction {
    /// "M:SS" to seconds
    Parse { value: String },
    /// Seconds to "M:SS"
    Format { secs: u32 },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // Logs go to stderr so stdout stays JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Duration { action } => run_duration(action)?,
        Commands::Resolve { id, catalog } => {
            let catalog = replay::load_catalog(&catalog_path(catalog.as_deref(), &config)?)?;
            let track = replay::resolve(&id, &catalog, &config.playback)?;
            print_json(&track)?;
        }
        Commands::Replay {
            catalog,
            script,
            page,
            seed,
        } => {
            let report = run_replay(catalog.as_deref(), &script, page, seed, &config)?;
            print_json(&report)?;
            if !report.is_clean() {
                tracing::warn!("{} gesture(s) failed", report.errors.len());
            }
        }
    }

    Ok(())
}

fn run_duration(action: DurationAction) -> anyhow::Result<()> {
    match action {
        DurationAction::Parse { value } => {
            let secs = parse_duration(&value)?;
            print_json(&serde_json::json!({ "input": value, "seconds": secs }))
        }
        DurationAction::Format { secs } => {
            print_json(&serde_json::json!({ "seconds": secs, "formatted": format_duration(secs) }))
        }
    }
}

fn run_replay(
    catalog: Option<&Path>,
    script: &Path,
    page: Page,
    seed: Option<u64>,
    config: &AppConfig,
) -> anyhow::Result<ReplayReport> {
    let catalog = replay::load_catalog(&catalog_path(catalog, config)?)?;
    let gestures = replay::load_script(script)?;
    let mut resolver = match seed {
        Some(seed) => TrackResolver::seeded(&config.playback, seed),
        None => TrackResolver::new(&config.playback),
    };

    Ok(replay::replay(
        &catalog,
        &gestures,
        page,
        &mut resolver,
        &config.playback,
    ))
}

fn catalog_path(flag: Option<&Path>, config: &AppConfig) -> Result<PathBuf, CliError> {
    flag.map(Path::to_path_buf)
        .or_else(|| config.catalog.path.clone())
        .ok_or(CliError::MissingCatalog)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
