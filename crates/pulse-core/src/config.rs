use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str| -> Result<Option<String>, ConfigError> {
        match lookup(var) {
            Ok(v) if v.trim().is_empty() => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            }),
            Ok(v) => Ok(Some(v)),
            Err(_) => Ok(None),
        }
    };

    let env = parse_environment(&or_default("PULSE_ENV", "development"))?;
    let data_path = non_empty("PULSE_DATA_PATH")?.map(PathBuf::from);
    let narratives_override = non_empty("PULSE_NARRATIVES_PATH")?;
    let narratives_path_explicit = narratives_override.is_some();
    let narratives_path = PathBuf::from(
        narratives_override.unwrap_or_else(|| "./config/narratives.yaml".to_string()),
    );
    let log_level = or_default("PULSE_LOG_LEVEL", "info");

    Ok(AppConfig {
        env,
        data_path,
        narratives_path,
        narratives_path_explicit,
        log_level,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PULSE_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}
