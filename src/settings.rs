// src/settings.rs
use anyhow::{Result, Context};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "BUSROUTE";

/// Runtime settings for the binary. The store itself has no settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub log_filter: String,
    pub snapshot_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            snapshot_dir: default_snapshot_dir(),
        }
    }
}

pub fn default_snapshot_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("busroute").join("snapshots"))
        .unwrap_or_else(|| PathBuf::from("snapshots"))
}

impl Settings {
    /// Defaults, then the optional settings file, then `BUSROUTE_*` variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = config::Config::builder()
            .set_default("log_filter", defaults.log_filter)?
            .set_default("snapshot_dir", defaults.snapshot_dir.to_string_lossy().to_string())?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Failed to parse settings")
    }
}
