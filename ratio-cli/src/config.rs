//! Settings file for the `ratio-fin` binary.
//!
//! ```toml
//! [database]
//! backend = "sqlite"
//! connection_string = "ratios.db"
//!
//! [logging]
//! level = "info"
//! file = "ratio-fin.log"
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ratio_core::db::DbConfig;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "RATIO_FIN_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "ratio-fin.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level (`info`) or any `EnvFilter` directive.
    pub level: String,
    /// Append log lines to this file as well as stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DbConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the file picked by [`config_path`], or defaults when there is none.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path(explicit, std::env::var_os(CONFIG_ENV_VAR)) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces file values with every override that is set.
    pub fn with_overrides(
        mut self,
        overrides: ConfigOverrides,
    ) -> Self {
        if let Some(backend) = overrides.backend {
            self.database.backend = backend;
        }
        if let Some(connection_string) = overrides.connection_string {
            self.database.connection_string = connection_string;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        self
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub backend: Option<String>,
    pub connection_string: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Chooses the config file: an explicit path, then the environment
/// variable, then [`DEFAULT_CONFIG_FILE`] if it exists in the working
/// directory.
pub fn config_path(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(value));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.is_file().then_some(default)
}
