//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store and
//! services. Request handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_DATABASE_NAME, DEFAULT_MAX_POOL_SIZE, DEFAULT_MONGO_URI};
use crate::error::{MenuError, MenuResult};
use std::str::FromStr;

/// Which [`DocumentStore`](crate::store::DocumentStore) implementation to open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = MenuError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            other => Err(MenuError::InvalidConfig(format!(
                "unknown store backend: {other}"
            ))),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    mongo_uri: String,
    database_name: String,
    max_pool_size: u32,
    store_backend: StoreBackend,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidConfig`] if the URI or database name is blank, or the pool
    /// size is zero.
    pub fn new(
        mongo_uri: String,
        database_name: String,
        max_pool_size: u32,
        store_backend: StoreBackend,
    ) -> MenuResult<Self> {
        if mongo_uri.trim().is_empty() {
            return Err(MenuError::InvalidConfig("mongo_uri cannot be empty".into()));
        }
        if database_name.trim().is_empty() {
            return Err(MenuError::InvalidConfig(
                "database_name cannot be empty".into(),
            ));
        }
        if max_pool_size == 0 {
            return Err(MenuError::InvalidConfig(
                "max_pool_size must be at least 1".into(),
            ));
        }

        Ok(Self {
            mongo_uri,
            database_name,
            max_pool_size,
            store_backend,
        })
    }

    /// Builds the configuration from raw environment values, applying defaults for unset ones.
    pub fn from_env_values(
        mongo_uri: Option<String>,
        database_name: Option<String>,
        max_pool_size: Option<String>,
        store_backend: Option<String>,
    ) -> MenuResult<Self> {
        Self::new(
            mongo_uri.unwrap_or_else(|| DEFAULT_MONGO_URI.into()),
            database_name.unwrap_or_else(|| DEFAULT_DATABASE_NAME.into()),
            max_pool_size_from_env_value(max_pool_size)?,
            store_backend_from_env_value(store_backend)?,
        )
    }

    /// Reads `MENU_MONGO_URI`, `MENU_DB_NAME`, `MENU_MAX_POOL_SIZE` and `MENU_STORE`.
    pub fn from_env() -> MenuResult<Self> {
        Self::from_env_values(
            std::env::var("MENU_MONGO_URI").ok(),
            std::env::var("MENU_DB_NAME").ok(),
            std::env::var("MENU_MAX_POOL_SIZE").ok(),
            std::env::var("MENU_STORE").ok(),
        )
    }

    pub fn mongo_uri(&self) -> &str {
        &self.mongo_uri
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn max_pool_size(&self) -> u32 {
        self.max_pool_size
    }

    pub fn store_backend(&self) -> StoreBackend {
        self.store_backend
    }
}

/// Parse the store backend from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`StoreBackend::Mongo`].
pub fn store_backend_from_env_value(value: Option<String>) -> MenuResult<StoreBackend> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<StoreBackend>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Parse the maximum pool size from an optional string value.
pub fn max_pool_size_from_env_value(value: Option<String>) -> MenuResult<u32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_MAX_POOL_SIZE),
        Some(v) => v
            .parse::<u32>()
            .map_err(|e| MenuError::InvalidConfig(format!("invalid max pool size {v:?}: {e}"))),
    }
}
