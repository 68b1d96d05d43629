//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_API_BASE;
use crate::model::DEFAULT_CLINIC_ID;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Clinic API connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Clinic assumed when creating patients
    #[serde(default = "default_clinic_id")]
    pub clinic_id: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_clinic_id() -> u64 {
    DEFAULT_CLINIC_ID
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            clinic_id: default_clinic_id(),
        }
    }
}

/// Where the signed-in session is kept between runs
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_file")]
    pub file: String,
}

fn default_session_file() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("dentcare").join("session.json").to_string_lossy().to_string())
        .unwrap_or_else(|| "./.dentcare_session.json".to_string())
}

impl SessionConfig {
    /// Session file with a leading `~` expanded to the home directory
    pub fn path(&self) -> PathBuf {
        expand_home(&self.file)
    }
}

fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(raw),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(raw),
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("dentcare").join("config.toml")),
            Some(PathBuf::from("/etc/dentcare/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// An explicit path must load; otherwise fall back to the default search
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("DENTCARE_API_URL") {
            self.api.base_url = url;
        }
        if let Some(clinic) = lookup("DENTCARE_CLINIC_ID") {
            match clinic.parse() {
                Ok(id) => self.api.clinic_id = id,
                Err(_) => tracing::warn!("Ignoring invalid DENTCARE_CLINIC_ID: {}", clinic),
            }
        }

        if let Some(file) = lookup("DENTCARE_SESSION_FILE") {
            self.session.file = file;
        }

        if let Some(level) = lookup("DENTCARE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DENTCARE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# DentCare Console Configuration
#
# Environment variables override these settings:
# - DENTCARE_API_URL
# - DENTCARE_CLINIC_ID
# - DENTCARE_SESSION_FILE
# - DENTCARE_LOG_LEVEL
# - DENTCARE_LOG_FORMAT

[api]
# Clinic API base URL
base_url = "http://localhost:8000/api"

# Clinic assigned to newly registered patients
clinic_id = 1

[session]
# File holding the signed-in user and token
file = "~/.local/share/dentcare/session.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for terminals) or json (for log collectors)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.clinic_id, 1);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.session.file.ends_with("session.json"));
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_generated_session_path_is_absolute() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let path = config.session.path();

        if let Some(home) = dirs::home_dir() {
            assert!(path.is_absolute());
            assert!(path.starts_with(&home));
            assert!(path.ends_with(".local/share/dentcare/session.json"));
        }
    }

    #[test]
    fn test_session_path_without_tilde_is_untouched() {
        let session = SessionConfig {
            file: "/var/lib/dentcare/session.json".to_string(),
        };
        assert_eq!(session.path(), PathBuf::from("/var/lib/dentcare/session.json"));

        let named = SessionConfig {
            file: "~clinic/session.json".to_string(),
        };
        assert_eq!(named.path(), PathBuf::from("~clinic/session.json"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://klinik.example/api\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.base_url, "https://klinik.example/api");
        assert_eq!(config.api.clinic_id, 1);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[api\n").unwrap();
        assert!(matches!(Config::resolve(Some(&broken)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("DENTCARE_API_URL", "http://10.0.0.5:8000/api"),
            ("DENTCARE_CLINIC_ID", "x"),
            ("DENTCARE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000/api");
        assert_eq!(config.api.clinic_id, 1);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }
}
