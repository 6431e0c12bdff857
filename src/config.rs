//! Host configuration, read from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::app::router;
use crate::client::BOOKS_RESOURCE;
use crate::logging::LogDestination;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Invalid url '{value}': {source}")]
    UrlError {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Settings for the console host.
///
/// ```toml
/// base_url = "http://localhost:8080/app/"
/// books_resource = "books.json"
/// start_path = "/data"
/// log_level = "debug"
/// log_destination = "both"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The app base path; `books_resource` is resolved against it.
    pub base_url: String,
    pub books_resource: String,
    /// Location the host navigates to after startup.
    pub start_path: String,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            books_resource: BOOKS_RESOURCE.to_string(),
            start_path: router::format(Default::default()).to_string(),
            log_level: LevelFilter::Info,
            log_destination: LogDestination::File,
        }
    }
}

const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

impl AppConfig {
    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `AppConfig::default()`.
    /// - If it exists, parses it as TOML and validates.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks that the start path is a known route and the books resource
    /// resolves against the base URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if router::parse(&self.start_path).is_none() {
            return Err(ConfigError::ValidationError {
                message: format!("start_path '{}' is not a known route", self.start_path),
            });
        }

        if self.books_resource.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "books_resource must not be empty".to_string(),
            });
        }

        self.books_url()?;

        Ok(())
    }

    /// Resolves `books_resource` against `base_url` the way a browser
    /// resolves a relative link, so `http://host/app/` + `books.json` is
    /// `http://host/app/books.json`.
    pub fn books_url(&self) -> Result<Url, ConfigError> {
        let base = Url::parse(&self.base_url).map_err(|source| ConfigError::UrlError {
            value: self.base_url.clone(),
            source,
        })?;
        base.join(&self.books_resource)
            .map_err(|source| ConfigError::UrlError {
                value: self.books_resource.clone(),
                source,
            })
    }
}
