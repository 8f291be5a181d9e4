//! Application errors

use std::path::PathBuf;

use chirocare_nav::NavError;

/// Result alias for app-level operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the app shell
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Navigation failed (unknown route, duplicate registration, bad parameter)
    #[error(transparent)]
    Nav(#[from] NavError),

    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`AppConfig`](crate::config::AppConfig)
    #[error("Failed to parse config file {}: {message}", path.display())]
    ConfigParse {
        /// File that was parsed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Config values are inconsistent
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong
        message: String,
    },
}

impl AppError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether the user can fix this by editing configuration
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigRead { .. } | Self::ConfigParse { .. } | Self::InvalidConfig { .. }
        )
    }
}
