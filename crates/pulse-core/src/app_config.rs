use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Mentions CSV. Optional here because the CLI can supply it with `--data`.
    pub data_path: Option<PathBuf>,
    pub narratives_path: PathBuf,
    /// True when `PULSE_NARRATIVES_PATH` was set. A missing default file is
    /// tolerated; a missing explicit one is an error.
    pub narratives_path_explicit: bool,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_level: String,
}
