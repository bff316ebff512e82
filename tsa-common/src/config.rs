//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5780;

/// Environment variable overriding the listen port
pub const PORT_ENV_VAR: &str = "TSA_PORT";

/// Environment variable overriding the backend base URL
pub const BACKEND_URL_ENV_VAR: &str = "TSA_BACKEND_URL";

/// Settings readable from the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Listen port for the HTTP server
    pub port: Option<u16>,
    /// Base URL of a real backend; fixtures are served when absent
    pub backend_url: Option<String>,
}

/// Load the TOML config file, if one exists.
///
/// Checks the user config directory first (`<config>/tsa/config.toml`),
/// then `/etc/tsa/config.toml` on Linux. A missing file yields defaults;
/// an unreadable or malformed file is logged and ignored.
pub fn load_toml_config() -> TomlConfig {
    let Some(path) = find_config_file() else {
        return TomlConfig::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str::<TomlConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed config file {}: {}", path.display(), e);
                TomlConfig::default()
            }
        },
        Err(e) => {
            warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            TomlConfig::default()
        }
    }
}

fn find_config_file() -> Option<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("tsa").join("config.toml")) {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/tsa/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Resolve the listen port following the priority order
pub fn resolve_port(cli_arg: Option<u16>, file: &TomlConfig) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }

    if let Ok(value) = std::env::var(PORT_ENV_VAR) {
        match value.parse() {
            Ok(port) => return port,
            Err(_) => warn!("Ignoring non-numeric {}: {:?}", PORT_ENV_VAR, value),
        }
    }

    file.port.unwrap_or(DEFAULT_PORT)
}

/// Resolve the backend base URL following the priority order.
///
/// None means no backend is configured and every response comes from the
/// built-in fixture dataset.
pub fn resolve_backend_url(cli_arg: Option<&str>, file: &TomlConfig) -> Option<String> {
    if let Some(url) = cli_arg {
        return Some(url.to_string());
    }

    if let Ok(url) = std::env::var(BACKEND_URL_ENV_VAR) {
        if !url.is_empty() {
            return Some(url);
        }
    }

    file.backend_url.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_config_parses_known_keys() {
        let config: TomlConfig = toml::from_str(
            r#"
            port = 6000
            backend_url = "http://localhost:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, Some(6000));
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, None);
        assert_eq!(config.backend_url, None);
    }

    #[test]
    fn cli_argument_takes_priority() {
        let file = TomlConfig {
            port: Some(6000),
            backend_url: Some("http://file-backend".to_string()),
        };
        assert_eq!(resolve_port(Some(7000), &file), 7000);
        assert_eq!(
            resolve_backend_url(Some("http://cli-backend"), &file).as_deref(),
            Some("http://cli-backend")
        );
    }

    #[test]
    fn file_value_used_when_no_override() {
        // Environment variables are not set under `cargo test` for these names
        let file = TomlConfig {
            port: Some(6000),
            backend_url: None,
        };
        assert_eq!(resolve_port(None, &file), 6000);
        assert_eq!(resolve_backend_url(None, &file), None);
    }

    #[test]
    fn compiled_default_is_last_resort() {
        let file = TomlConfig::default();
        assert_eq!(resolve_port(None, &file), DEFAULT_PORT);
    }
}
