//! Configuration management for the library catalog

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::models::borrower::DEFAULT_MAX_LOANS;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Backing file holding one record per line
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LendingConfig {
    pub max_loans: usize,
    /// Name the refusal reason instead of the single generic message
    pub explain_refusals: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    pub admin_name: String,
    pub reader_name: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub lending: LendingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // LIBRARY__LENDING__MAX_LOANS=5 -> lending.max_loans
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("catalog.path", env::var("CATALOG_PATH").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Default configuration bound to an explicit backing file
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            catalog: CatalogConfig {
                path: path.as_ref().to_path_buf(),
            },
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("books.txt"),
        }
    }
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            max_loans: DEFAULT_MAX_LOANS,
            explain_refusals: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            admin_name: "Admin".to_string(),
            reader_name: "Reader".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
