use thiserror::Error;

#[derive(Debug, Error)]
pub enum PharmalensError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet not found: workbook has {found} sheets, wanted index {index}")]
    SheetNotFound { index: usize, found: usize },

    #[error("Sheet '{0}' has no rows")]
    EmptySheet(String),

    #[error("Schema mismatch in sheet '{sheet}': expected at least {expected} columns, found {found}")]
    SchemaMismatch {
        sheet: String,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PharmalensError>;
