//! # App Configuration
//!
//! Layered the usual way: defaults, then an optional TOML file, then
//! `CHIROCARE_*` environment variables, then validation.
//!
//! ```toml
//! start_route = "login"
//! max_history = 20
//! log_filter = "chirocare_nav=debug,info"
//! ```

use std::path::Path;

use chirocare_nav::Route;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Environment variable overriding [`AppConfig::start_route`]
pub const ENV_START_ROUTE: &str = "CHIROCARE_START_ROUTE";
/// Environment variable overriding [`AppConfig::max_history`]; `unbounded` clears the cap
pub const ENV_MAX_HISTORY: &str = "CHIROCARE_MAX_HISTORY";
/// Environment variable overriding [`AppConfig::log_filter`]
pub const ENV_LOG: &str = "CHIROCARE_LOG";

/// Headless app configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the route the app opens on
    pub start_route: String,
    /// Opt-in back stack depth cap; `None` (the default) keeps every entry
    pub max_history: Option<usize>,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_route: "home".to_string(),
            max_history: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load a config from a TOML file. Missing keys take their defaults.
    pub fn load_from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| AppError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply `CHIROCARE_*` overrides from the process environment
    pub fn merge_with_env(&mut self) -> AppResult<()> {
        self.merge_from_vars(std::env::vars())
    }

    /// Apply overrides from `(key, value)` pairs
    pub fn merge_from_vars<I, K, V>(&mut self, vars: I) -> AppResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            match key.as_ref() {
                ENV_START_ROUTE => self.start_route = value.into(),
                ENV_LOG => self.log_filter = value.into(),
                ENV_MAX_HISTORY => {
                    let value: String = value.into();
                    let trimmed = value.trim();
                    self.max_history = if trimmed.eq_ignore_ascii_case("unbounded") {
                        None
                    } else {
                        let depth = trimmed.parse::<usize>().map_err(|_| {
                            AppError::invalid_config(format!(
                                "{ENV_MAX_HISTORY} must be a number or `unbounded`, got {value:?}"
                            ))
                        })?;
                        Some(depth)
                    };
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Check that the values can boot an app
    pub fn validate(&self) -> AppResult<()> {
        self.start()?;
        if let Some(depth) = self.max_history {
            if depth < 2 {
                return Err(AppError::invalid_config(format!(
                    "max_history must be at least 2, got {depth}"
                )));
            }
        }
        Ok(())
    }

    /// Parsed start route
    pub fn start(&self) -> AppResult<Route> {
        Ok(self.start_route.parse::<Route>()?)
    }
}
