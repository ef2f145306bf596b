use crate::constants;
use crate::error::{DirectoryError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings for both stages. Every field has a default, so a missing
/// configuration file (or a partial one) is fine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sheet_index: usize,
    pub marker: String,
    pub support_path: String,
    pub default_owner: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(constants::DEFAULT_SPREADSHEET),
            output: PathBuf::from(constants::DEFAULT_EXPORT),
            sheet_index: 0,
            marker: constants::URL_MARKER.to_string(),
            support_path: constants::SUPPORT_PATH.to_string(),
            default_owner: constants::DEFAULT_OWNER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
    pub logout_url: String,
    pub columns: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(constants::DEFAULT_EXPORT),
            output: PathBuf::from(constants::DEFAULT_HTML),
            title: constants::PAGE_TITLE.to_string(),
            logout_url: constants::SAML_LOGOUT_URL.to_string(),
            columns: constants::DISPLAY_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// When set, a JSON log file is written here in addition to the console.
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Loads `support_directory.toml` from the working directory.
    pub fn load() -> Result<Self> {
        Self::load_from(constants::DEFAULT_CONFIG_FILE)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DirectoryError::Configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.extract.marker.trim().is_empty() {
            return Err(DirectoryError::Configuration(
                "extract.marker must not be empty".to_string(),
            ));
        }
        let suffix = &self.extract.support_path;
        if suffix.len() < 2 || !suffix.starts_with('/') || !suffix.ends_with('/') {
            return Err(DirectoryError::Configuration(format!(
                "extract.support_path must start and end with '/', got '{}'",
                suffix
            )));
        }
        if self.render.columns == 0 {
            return Err(DirectoryError::Configuration(
                "render.columns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
