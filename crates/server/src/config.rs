//! Runtime configuration for the recipe server.
//!
//! Values come from the environment, each with a default:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `RECIPES_BIND` | `0.0.0.0:3000` | Listen address |
//! | `RECIPES_API_PREFIX` | `/api` | Path the recipe routes are mounted under |
//! | `RECIPES_SEED_FILE` | unset | JSON array of recipes loaded at startup |
//!
//! The CLI can override any of them after loading.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

pub const BIND_VAR: &str = "RECIPES_BIND";
pub const API_PREFIX_VAR: &str = "RECIPES_API_PREFIX";
pub const SEED_FILE_VAR: &str = "RECIPES_SEED_FILE";

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    /// Normalised: empty for the root, otherwise `/segment` with no trailing slash
    pub api_prefix: String,
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_VAR).unwrap_or_else(|| {
            info!("{BIND_VAR} not set, using default: {DEFAULT_BIND}");
            DEFAULT_BIND.to_string()
        });
        let bind: SocketAddr = bind_raw
            .trim()
            .parse()
            .map_err(|e: AddrParseError| ConfigError::InvalidValue {
                key: BIND_VAR.to_string(),
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let api_prefix = match lookup(API_PREFIX_VAR) {
            Some(raw) => normalize_prefix(&raw),
            None => DEFAULT_API_PREFIX.to_string(),
        };

        let seed_file = lookup(SEED_FILE_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind,
            api_prefix,
            seed_file,
        })
    }

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_api_prefix(mut self, prefix: &str) -> Self {
        self.api_prefix = normalize_prefix(prefix);
        self
    }

    pub fn with_seed_file(mut self, path: PathBuf) -> Self {
        self.seed_file = Some(path);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            seed_file: None,
        }
    }
}

/// `"api/"` -> `"/api"`, `"/"` -> `""`, `"/v1/api"` stays as is
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
