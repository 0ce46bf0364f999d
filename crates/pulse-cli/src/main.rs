mod highlight;
mod report;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pulse_core::{AppConfig, ConfigError, Environment, NarrativeTable, RecordStore};

use crate::report::{build_report, render_all, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "pulse")]
#[command(about = "Competitor mention sentiment reports")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render metrics, summary, and mentions for each competitor
    Report {
        /// Mentions CSV; overrides `PULSE_DATA_PATH`
        #[arg(long)]
        data: Option<PathBuf>,

        /// Restrict the report to one competitor (exact match)
        #[arg(long)]
        competitor: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Include the per-mention table, newest first
        #[arg(long)]
        details: bool,
    },
    /// List the distinct competitors in the dataset
    Competitors {
        /// Mentions CSV; overrides `PULSE_DATA_PATH`
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.env != Environment::Production)
        .init();
}

fn resolve_data_path(flag: Option<PathBuf>, config: &AppConfig) -> anyhow::Result<PathBuf> {
    flag.or_else(|| config.data_path.clone()).ok_or_else(|| {
        anyhow::anyhow!("no mentions file given; pass --data or set PULSE_DATA_PATH")
    })
}

fn load_store(path: &Path) -> anyhow::Result<RecordStore> {
    RecordStore::load(path).with_context(|| format!("loading mentions from {}", path.display()))
}

/// Load the narrative table. A missing file at the default location yields an
/// empty table so reports fall back to generated summaries.
fn load_narrative_table(config: &AppConfig) -> anyhow::Result<NarrativeTable> {
    match pulse_core::load_narratives(&config.narratives_path) {
        Err(ConfigError::NarrativesFileIo { ref source, .. })
            if source.kind() == std::io::ErrorKind::NotFound
                && !config.narratives_path_explicit =>
        {
            tracing::warn!(
                path = %config.narratives_path.display(),
                "narratives file not found; using generated summaries only"
            );
            Ok(NarrativeTable::default())
        }
        result => result.with_context(|| {
            format!(
                "loading narratives from {}",
                config.narratives_path.display()
            )
        }),
    }
}

fn run_report(
    config: &AppConfig,
    data: Option<PathBuf>,
    competitor: Option<&str>,
    format: OutputFormat,
    details: bool,
) -> anyhow::Result<()> {
    let store = load_store(&resolve_data_path(data, config)?)?;
    let narratives = load_narrative_table(config)?;

    let all = store.distinct_competitors();
    let selected: Vec<&str> = match competitor {
        Some(name) => {
            let found = all
                .get(name)
                .copied()
                .ok_or_else(|| anyhow::anyhow!("competitor '{name}' not found in dataset"))?;
            vec![found]
        }
        None => all.into_iter().collect(),
    };

    tracing::info!(competitors = selected.len(), "rendering report");

    let reports: Vec<_> = selected
        .into_iter()
        .map(|c| build_report(&store, c, &narratives))
        .collect();

    println!("{}", render_all(&reports, format, details)?);
    Ok(())
}

fn run_competitors(config: &AppConfig, data: Option<PathBuf>) -> anyhow::Result<()> {
    let store = load_store(&resolve_data_path(data, config)?)?;
    for competitor in store.distinct_competitors() {
        println!("{competitor}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = pulse_core::load_app_config()?;
    init_tracing(&config);

    match command {
        Commands::Report {
            data,
            competitor,
            format,
            details,
        } => run_report(&config, data, competitor.as_deref(), format, details)?,
        Commands::Competitors { data } => run_competitors(&config, data)?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
