//! Service configuration resolution
//!
//! Each setting is resolved independently, first match wins:
//! 1. Command-line argument or its `CATALOG_*` environment variable
//!    (supplied by the binary as [`ConfigOverrides`])
//! 2. `PORT` environment variable (port only)
//! 3. TOML config file: a `[services.<name>]` table, then top-level keys
//! 4. Compiled defaults for the service
//!
//! A missing config file is not an error; an unreadable or malformed one is.

use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default bind host for every service
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Compiled defaults for one service
#[derive(Debug, Clone)]
pub struct ServiceDefaults {
    /// Name used for the `[services.<name>]` table
    pub service_name: &'static str,
    pub port: u16,
    pub route_prefix: &'static str,
}

/// Values supplied on the command line (or their environment variables)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub route_prefix: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Settings that may appear at the top level of the config file or in a
/// per-service table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub route_prefix: Option<String>,
}

/// Parsed config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub database: Option<PathBuf>,
    #[serde(default)]
    pub route_prefix: Option<String>,
    #[serde(default)]
    pub services: HashMap<String, ServiceSection>,
}

impl TomlConfig {
    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }

    /// Load from `path`, or `None` when the file does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&content).map(Some)
    }

    /// Settings for `service`, with the per-service table taking precedence
    pub fn section_for(&self, service: &str) -> ServiceSection {
        let specific = self.services.get(service).cloned().unwrap_or_default();
        ServiceSection {
            host: specific.host.or_else(|| self.host.clone()),
            port: specific.port.or(self.port),
            database: specific.database.or_else(|| self.database.clone()),
            route_prefix: specific.route_prefix.or_else(|| self.route_prefix.clone()),
        }
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub route_prefix: String,
}

impl ServiceConfig {
    /// Resolve configuration using the process environment
    pub fn resolve(defaults: &ServiceDefaults, overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve_with_env(defaults, overrides, |key| std::env::var(key).ok())
    }

    /// Resolve configuration with an explicit environment lookup
    pub fn resolve_with_env<F>(
        defaults: &ServiceDefaults,
        overrides: ConfigOverrides,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = overrides.config_file.clone().or_else(default_config_file);
        let file = match &config_path {
            Some(path) => {
                let loaded = TomlConfig::load(path)?;
                if loaded.is_none() {
                    if overrides.config_file.is_some() {
                        warn!("Config file {} not found, using defaults", path.display());
                    } else {
                        debug!("No config file at {}", path.display());
                    }
                }
                loaded.unwrap_or_default()
            }
            None => TomlConfig::default(),
        };
        let section = file.section_for(defaults.service_name);

        let env_port = match env("PORT") {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|_| {
                Error::Config(format!("PORT must be a port number, got {:?}", raw))
            })?),
            None => None,
        };

        let route_prefix = overrides
            .route_prefix
            .or(section.route_prefix)
            .unwrap_or_else(|| defaults.route_prefix.to_string());
        validate_route_prefix(&route_prefix)?;

        Ok(Self {
            host: overrides
                .host
                .or(section.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(env_port).or(section.port).unwrap_or(defaults.port),
            database_path: overrides
                .database
                .or(section.database)
                .unwrap_or_else(default_database_path),
            route_prefix,
        })
    }

    /// Address to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A route prefix must start with `/` and must not end with one
pub fn validate_route_prefix(prefix: &str) -> Result<()> {
    if !prefix.starts_with('/') || prefix.ends_with('/') {
        return Err(Error::Config(format!(
            "Route prefix must start with '/' and not end with '/': {:?}",
            prefix
        )));
    }
    Ok(())
}

/// Platform config file location, if the platform has a config directory
fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("course-catalog").join("config.toml"))
}

/// Platform default database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("course-catalog"))
        .unwrap_or_else(|| PathBuf::from("./catalog_data"))
        .join("catalog.db")
}
