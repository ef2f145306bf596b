use crate::config::Config;
use crate::error::{DirectoryError, Result};
use clap::Args;
use std::path::PathBuf;

/// Flags shared by both binaries. All of them are optional; without flags
/// the fixed file names in the working directory are used.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file (default: support_directory.toml, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the input file
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Override the output file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl CommonArgs {
    /// Loads the configuration. An explicitly named config file must exist.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) if !path.exists() => Err(DirectoryError::not_found(path)),
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}
