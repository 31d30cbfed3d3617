use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::adapter::repositories::file_log_repository::{default_log_dir, DEFAULT_LOG_EXTENSION};
use crate::application::dto::report_settings::{MalformedLinePolicy, ReportSettings};

pub const DEFAULT_STORE_PATH: &str = "./reports.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Log directory used when a request passes an empty folder path
    pub default_log_dir: Option<String>,
    pub store_path: String,
    pub log_extension: String,
    pub malformed_lines: MalformedLinePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_log_dir: None,
            store_path: DEFAULT_STORE_PATH.to_string(),
            log_extension: DEFAULT_LOG_EXTENSION.to_string(),
            malformed_lines: MalformedLinePolicy::default(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// Missing config file falls back to defaults
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn log_dir(&self) -> PathBuf {
        match &self.default_log_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).as_ref()),
            None => default_log_dir(),
        }
    }

    pub fn settings(&self) -> ReportSettings {
        ReportSettings::new(self.store_path.clone(), self.malformed_lines)
    }
}
