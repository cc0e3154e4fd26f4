//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.moodlens/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MoodLensConfig {
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.moodlens/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".moodlens").join("config.toml"))
}

/// Load config from `~/.moodlens/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MoodLensConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MoodLensConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MoodLensConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MoodLensConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MoodLensConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# MoodLens Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [service]
# base_url = "http://127.0.0.1:8000"   # Or set MOODLENS_BASE_URL env var
# request_timeout_secs = 10
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &MoodLensConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MOODLENS_BASE_URL").ok())
        .or_else(|| config.service.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Endpoint paths are appended as "/analyze" etc., so a trailing
    // slash here would produce "//analyze".
    let base_url = base_url.trim_end_matches('/').to_string();

    let request_timeout = Duration::from_secs(
        config
            .service
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    );

    ResolvedConfig {
        base_url,
        request_timeout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = MoodLensConfig::default();
        assert!(config.service.base_url.is_none());
        assert!(config.service.request_timeout_secs.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MoodLensConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            resolved.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MoodLensConfig {
            service: ServiceConfig {
                base_url: Some("http://192.168.1.50:9000".to_string()),
                request_timeout_secs: Some(3),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, "http://192.168.1.50:9000");
        assert_eq!(resolved.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_resolve_cli_base_url_wins() {
        let config = MoodLensConfig {
            service: ServiceConfig {
                base_url: Some("http://from-config:8000".to_string()),
                request_timeout_secs: None,
            },
        };
        let resolved = resolve(&config, Some("http://from-cli:8000"));
        assert_eq!(resolved.base_url, "http://from-cli:8000");
    }

    #[test]
    fn test_resolve_trims_trailing_slash() {
        let config = MoodLensConfig::default();
        let resolved = resolve(&config, Some("http://localhost:8000/"));
        assert_eq!(resolved.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[service]
base_url = "http://10.0.0.2:8000"
request_timeout_secs = 30
"#;
        let config: MoodLensConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.service.base_url.as_deref(),
            Some("http://10.0.0.2:8000")
        );
        assert_eq!(config.service.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[service]
request_timeout_secs = 5
"#;
        let config: MoodLensConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.request_timeout_secs, Some(5));
        assert!(config.service.base_url.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: MoodLensConfig = toml::from_str("").unwrap();
        assert!(config.service.base_url.is_none());
    }
}
