//! Core types for competitor pulse: mention records, the record store, the
//! narrative table, and environment-driven application config.

pub mod app_config;
pub mod config;
pub mod mention;
pub mod narratives;
pub mod store;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use mention::{parse_timestamp, Label, Mention};
pub use narratives::{
    load_narratives, parse_narratives, NarrativeEntry, NarrativeTable, NarrativesFile,
};
pub use store::{
    filter_by_competitor_and_labels, sort_for_display, RecordStore, REQUIRED_COLUMNS,
};

/// Failure to produce a record set from the mentions source.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to read mentions file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed mentions data: {0}")]
    Csv(#[from] csv::Error),

    #[error("mentions data is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read narratives file {path}: {source}")]
    NarrativesFileIo {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse narratives file: {0}")]
    NarrativesFileParse(#[source] serde_yaml::Error),

    #[error("narratives validation failed: {0}")]
    Validation(String),
}
