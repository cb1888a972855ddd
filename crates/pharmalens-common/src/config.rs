//! Configuration loading for Pharmalens.
//! Reads pharmalens.toml from the current directory or path in PHARMALENS_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PharmalensError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workbook: WorkbookConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookConfig {
    /// Path to the xlsx workbook holding the pipeline timeline and drug detail sheets.
    #[serde(default = "default_workbook_path")]
    pub path: String,
    /// Sheet index of the timeline grid (header row = years).
    #[serde(default)]
    pub timeline_sheet: usize,
    /// Sheet index of the per-drug detail table.
    #[serde(default = "default_detail_sheet")]
    pub detail_sheet: usize,
}

fn default_workbook_path() -> String { "pipeline.xlsx".to_string() }
fn default_detail_sheet() -> usize { 1 }

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            path: default_workbook_path(),
            timeline_sheet: 0,
            detail_sheet: default_detail_sheet(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from pharmalens.toml.
    /// Checks PHARMALENS_CONFIG env var first, then current directory.
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load() -> Result<Self> {
        let path = std::env::var("PHARMALENS_CONFIG")
            .unwrap_or_else(|_| "pharmalens.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| PharmalensError::Config(format!("{}: {}", path, e)))?;
        Ok(config)
    }
}
