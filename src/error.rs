use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Unreadable input {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl DirectoryError {
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn format(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Process exit code reported by the binaries.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 2,
            Self::Format { .. } => 3,
            Self::Configuration(_) | Self::Toml(_) => 4,
            Self::Io { .. } | Self::Template(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
