//! pharmalens-common — Shared error type and configuration used across all
//! Pharmalens crates.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, ServerConfig, WorkbookConfig};
pub use error::{PharmalensError, Result};
