use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Default path to the config file, relative to the project root.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Resolve the config path: `CONFIG_PATH` from the environment (or `.env`),
/// falling back to `config.toml`.
pub fn config_path() -> String {
    let _ = dotenvy::dotenv();
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Parse the contents of a config file.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::bad_request(e.to_string()))
}

/// Read the config file and store it in the global `OnceLock`.
/// Only the first call has effect.
///
/// A missing or unparseable file falls back to the defaults: every feature
/// on, 2s scan, 3s recording, 5 starting credits.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let path = config_path();
        let config = match std::fs::read_to_string(&path) {
            Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
                tracing::warn!(%path, error = %e.message, "failed to parse config, using defaults");
                AppConfig::default()
            }),
            Err(e) => {
                tracing::warn!(%path, error = %e, "config file not found, using defaults");
                AppConfig::default()
            }
        };
        tracing::info!(
            social_login = config.features.social_login,
            manual_court_selection = config.features.manual_court_selection,
            scan_delay_ms = config.simulation.scan_delay_ms,
            recording_delay_ms = config.simulation.recording_delay_ms,
            "configuration loaded"
        );
        config
    })
}

/// The loaded configuration, or an internal error if `load_config` never ran.
pub fn app_config() -> Result<&'static AppConfig, AppError> {
    CONFIG
        .get()
        .ok_or_else(|| AppError::internal("Configuration has not been loaded"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn parse_partial_file_keeps_defaults() {
        let config = parse_config("[simulation]\nscan_delay_ms = 500\n").unwrap();
        assert_eq!(config.simulation.scan_delay_ms, 500);
        assert_eq!(config.simulation.recording_delay_ms, 3000);
        assert!(config.features.social_login);
    }

    #[test]
    fn parse_garbage_is_bad_request() {
        let err = parse_config("[features\nsocial_login = ").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
    }
}
