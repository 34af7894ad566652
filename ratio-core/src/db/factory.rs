//! Choosing a storage backend by name at startup.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::repository::{RatioRepository, RepositoryError};

/// Where saved records live: the `[database]` section of `ratio-fin.toml`.
///
/// ```toml
/// [database]
/// backend = "sqlite"
/// connection_string = "ratios.db"   # or ":memory:" for a throwaway store
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub backend: String,
    /// Interpreted by the backend; for SQLite a path or `sqlite:` URL.
    pub connection_string: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            connection_string: "ratios.db".to_string(),
        }
    }
}

/// Opens a [`RatioRepository`] for one backend.
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    /// The `backend` value in [`DbConfig`] that selects this factory.
    fn backend_name(&self) -> &'static str;

    /// Connects and prepares the schema, so the repository can save records
    /// straight away.
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn RatioRepository>, RepositoryError>;
}

/// The backends a binary was built with.
pub struct RepositoryRegistry {
    factories: HashMap<&'static str, Box<dyn RepositoryFactory>>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Adds `factory`; a second factory under the same name wins.
    pub fn register(
        &mut self,
        factory: Box<dyn RepositoryFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Opens the store named by `config.backend`.
    ///
    /// An unregistered name is a [`RepositoryError::Configuration`] listing
    /// what is available; factory errors pass through unchanged.
    pub async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn RatioRepository>, RepositoryError> {
        let Some(factory) = self.factories.get(config.backend.as_str()) else {
            return Err(RepositoryError::Configuration(format!(
                "unknown backend '{}'; available: {}",
                config.backend,
                self.available_backends().join(", ")
            )));
        };

        debug!(backend = %config.backend, "opening repository");
        factory.create(config).await
    }
}

impl Default for RepositoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
