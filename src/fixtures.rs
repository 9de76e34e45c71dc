//! Fixtures
//!
//! Catalog data lives in YAML fixture files so demos and tests share one
//! source of products and services.

use std::{fs, path::Path};

use thiserror::Error;

use crate::products::Catalog;

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files.
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Load a [`Catalog`] from a YAML fixture file.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, FixtureError> {
    let contents = fs::read_to_string(path)?;
    let catalog = serde_norway::from_str(&contents)?;

    Ok(catalog)
}
