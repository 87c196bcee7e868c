//! Server configuration.
//!
//! Built-in defaults, overlaid by an optional `termcal.toml`, overlaid by
//! `TERMCAL_*` environment variables (e.g. `TERMCAL_PORT=8080`).

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_CONFIG_FILE: &str = "termcal.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allow requests from any origin
    pub cors_permissive: bool,
    /// Filename offered for the generated calendar download
    pub download_filename: String,
    /// Largest accepted request body
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_permissive: true,
            download_filename: "timetable.ics".to_string(),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Path of the config file: `$TERMCAL_CONFIG`, or `termcal.toml` in the
    /// working directory.
    pub fn config_path() -> PathBuf {
        std::env::var_os("TERMCAL_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path` (which need not exist) and the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let defaults = ServerConfig::default();

        let config: ServerConfig = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("cors_permissive", defaults.cors_permissive)?
            .set_default("download_filename", defaults.download_filename)?
            .set_default("body_limit_bytes", defaults.body_limit_bytes as u64)?
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("TERMCAL").try_parsing(true))
            .build()
            .with_context(|| format!("Could not read config from {}", path.display()))?
            .try_deserialize()
            .context("Invalid server configuration")?;

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
