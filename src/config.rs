//! Server configuration.

use std::fs::File;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open catalog {path}: {source}")]
    CatalogOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog {path}: {source}")]
    CatalogInvalid {
        path: PathBuf,
        source: CatalogError,
    },
}

/// Settings of the `car-catalog` server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// JSON array of cars to serve instead of the built-in inventory.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::builtin());
        };
        let file = File::open(path).map_err(|source| ConfigError::CatalogOpen {
            path: path.clone(),
            source,
        })?;
        Catalog::from_json(file).map_err(|source| ConfigError::CatalogInvalid {
            path: path.clone(),
            source,
        })
    }
}
