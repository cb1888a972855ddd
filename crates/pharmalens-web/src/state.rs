//! Shared application state for the web server.

use std::sync::Arc;

use pharmalens_common::{Config, Result};
use pharmalens_core::LoadedData;

/// Shared state injected into every Axum handler.
///
/// The workbook is read exactly once, at startup; after that everything
/// in here is immutable, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub data: LoadedData,
}

impl AppState {
    /// Load the configured workbook and build the state.
    /// Any load failure is fatal: the server does not start on partial data.
    pub fn new(config: Config) -> Result<Self> {
        let data = LoadedData::load(&config.workbook)?;
        Ok(Self { config, data })
    }

    /// Build state from already-loaded data. Used by tests.
    pub fn from_data(config: Config, data: LoadedData) -> Self {
        Self { config, data }
    }
}

pub type SharedState = Arc<AppState>;
