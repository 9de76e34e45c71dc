//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Directory for persisted state
    #[clap(short, long, default_value = "target/storefront-data")]
    pub data_dir: PathBuf,

    /// Catalog fixture file
    #[clap(short, long, default_value = "fixtures/catalog.yml")]
    pub catalog: PathBuf,

    /// Wipe persisted state before running
    #[clap(long)]
    pub reset: bool,
}
