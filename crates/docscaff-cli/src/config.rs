//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup. The CLI layer owns config; the
//! core crate never sees it, and nothing here changes what is scaffolded.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `DOCSCAFF_*` environment variables, `__` between sections
//!    (`DOCSCAFF_LOGGING__LEVEL=debug`)
//! 3. Config file: `--config FILE`, else `<config dir>/docscaff/config.toml`
//!    when it exists
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when neither `-v`/`-q` nor `RUST_LOG` is given.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(path) = Self::config_path() {
                    builder = builder.add_source(config::File::from(path).required(false));
                }
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOCSCAFF")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let cfg: AppConfig = builder
            .build()
            .context("reading configuration sources")?
            .try_deserialize()
            .context("parsing configuration")?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would otherwise be silently ignored.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.logging.level.parse::<LevelFilter>().is_err() {
            bail!(
                "logging.level '{}' is not one of off, error, warn, info, debug, trace",
                self.logging.level
            );
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "docscaff", "docscaff")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
