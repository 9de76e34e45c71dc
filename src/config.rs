//! Store configuration.
//!
//! Deployment-specific values (where state lives, which catalog to load,
//! where the messaging collaborator points) come from a YAML file, with
//! defaults suitable for the demo.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Business display name.
    pub business_name: String,

    /// Number the WhatsApp collaborator opens conversations with.
    pub whatsapp_number: String,

    /// Directory the file-backed store keeps its state in.
    pub data_dir: PathBuf,

    /// Catalog fixture file to load products and services from.
    pub catalog: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            business_name: "CustomCrafts".to_owned(),
            whatsapp_number: "+910000000000".to_owned(),
            data_dir: PathBuf::from("target/storefront-data"),
            catalog: PathBuf::from("fixtures/catalog.yml"),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a YAML file. Missing fields fall back to the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = serde_norway::from_str(&contents)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"business_name: Swift Wraps\n")?;

        let config = StoreConfig::from_path(file.path())?;

        assert_eq!(config.business_name, "Swift Wraps");
        assert_eq!(config.whatsapp_number, "+910000000000");
        Ok(())
    }

    #[test]
    fn full_config_round_trips() -> TestResult {
        let config = StoreConfig {
            business_name: "Swift Wraps".to_owned(),
            whatsapp_number: "+911112223334".to_owned(),
            data_dir: PathBuf::from("/var/lib/storefront"),
            catalog: PathBuf::from("catalog.yml"),
        };

        let yaml = serde_norway::to_string(&config)?;
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(yaml.as_bytes())?;

        assert_eq!(StoreConfig::from_path(file.path())?, config);
        Ok(())
    }
}
