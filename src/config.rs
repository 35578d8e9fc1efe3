//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line overrides applied by the CLI.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CSV_PATH, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_SAMPLE_SIZE,
};
use crate::error::{EnergyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Energy CSV location
    pub csv_path: PathBuf,

    /// Address the HTTP server binds to
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Raw timestamps shown by `inspect`
    pub sample_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| EnergyError::configuration(format!("Invalid TOML configuration: {e}")))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            EnergyError::configuration(format!("Cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit path, else the user config file if it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(EnergyError::configuration("host must not be empty"));
        }
        if self.port == 0 {
            return Err(EnergyError::configuration("port must be greater than 0"));
        }
        if self.sample_size == 0 {
            return Err(EnergyError::configuration(
                "sample_size must be greater than 0",
            ));
        }
        if self.csv_path.as_os_str().is_empty() {
            return Err(EnergyError::configuration("csv_path must not be empty"));
        }
        Ok(())
    }
}

/// `<config dir>/campus-energy/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.csv_path, PathBuf::from("data/energy.csv"));
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str("port = 8080\ncsv_path = \"/srv/energy.csv\"").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.csv_path, PathBuf::from("/srv/energy.csv"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.sample_size, 6);
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = AppConfig::from_toml_str("port = \"eighty\"").unwrap_err();
        assert!(matches!(err, EnergyError::Configuration { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = AppConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            host: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            sample_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "host = \"0.0.0.0\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(dir.path().join("nope.toml").as_path())).is_err());
    }
}
