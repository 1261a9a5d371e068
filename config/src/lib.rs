//! # Configuration Management for PageHaus
//!
//! This crate provides the pagination configuration shared by every PageHaus
//! component: which page sizes a client may request, which columns it may
//! sort by, and the defaults used when it asks for neither.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::PaginationConfig;
//!
//! let config = PaginationConfig::new(
//!     vec![10, 25, 50, 100], 25,
//!     vec!["id".to_string(), "created_at".to_string()], "id".to_string(),
//! );
//! assert!(config.validate().is_ok());
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [limits]
//! allowed = [10, 25, 50, 100]
//! default = 25
//!
//! [sort]
//! allowed = ["id", "created_at"]
//! default = "id"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::PaginationConfig;
//!
//! // Load from PAGEHAUS_CONFIG or ./pagehaus.toml
//! let config = PaginationConfig::load()?;
//!
//! // Or load from custom path
//! let config = PaginationConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./pagehaus.toml";
const CONFIG_ENV_VAR: &str = "PAGEHAUS_CONFIG";

/// Page size used when neither the requested nor the default limit is allowed
pub const FALLBACK_LIMIT: u32 = 25;

/// Sort column used when neither the requested nor the default sort is allowed
pub const FALLBACK_SORT: &str = "id";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete pagination configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub limits: LimitConfig,
    pub sort: SortConfig,
}

/// Page size allow-list and default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitConfig {
    pub allowed: Vec<u32>,
    pub default: u32,
}

/// Sort column allow-list and default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub allowed: Vec<String>,
    pub default: String,
}

impl PaginationConfig {
    /// Create a new pagination configuration
    pub fn new(
        allowed_limits: Vec<u32>,
        default_limit: u32,
        allowed_sorts: Vec<String>,
        default_sort: String,
    ) -> Self {
        Self {
            limits: LimitConfig {
                allowed: allowed_limits,
                default: default_limit,
            },
            sort: SortConfig {
                allowed: allowed_sorts,
                default: default_sort,
            },
        }
    }

    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            // A missing .env file just means the process environment is used as is
            if !err.not_found() {
                return Err(err.into());
            }
        }

        // Try PAGEHAUS_CONFIG first
        if let Ok(config_path) = env::var(CONFIG_ENV_VAR) {
            Self::from_file(&config_path)
        }
        // Try to load config from DEFAULT_CONFIG_PATH
        else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        }
        // Return error if neither variable nor default config file exists
        else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// Defaults outside their allow-list are accepted here; the pagination
    /// state falls back to [`FALLBACK_LIMIT`] / [`FALLBACK_SORT`] for them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Limit validations
        if self.limits.allowed.is_empty() {
            return Err(ConfigError::Invalid(
                "limits.allowed cannot be empty".to_string(),
            ));
        }
        if self.limits.allowed.contains(&0) {
            return Err(ConfigError::Invalid(
                "limits.allowed cannot contain zero".to_string(),
            ));
        }
        if self.limits.default == 0 {
            return Err(ConfigError::Invalid(
                "limits.default must be greater than 0".to_string(),
            ));
        }

        // Sort validations
        if self.sort.allowed.is_empty() {
            return Err(ConfigError::Invalid(
                "sort.allowed cannot be empty".to_string(),
            ));
        }
        if self.sort.allowed.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "sort.allowed cannot contain an empty column name".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(
            vec![10, 25, 50, 100],
            FALLBACK_LIMIT,
            vec![FALLBACK_SORT.to_string()],
            FALLBACK_SORT.to_string(),
        )
    }
}
