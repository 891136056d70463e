use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, SpeciesError>;

/// Error type covering the different failure cases that can occur when the
/// tool loads, cleans, or persists a species list.
#[derive(Debug, Error)]
pub enum SpeciesError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing fails, e.g. for the configuration file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the CSV reader or writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when the workbook or species list path does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Raised when the requested sheet is absent from the workbook.
    #[error("sheet '{sheet}' not found in workbook (available: {})", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    /// Raised when a required column is absent from the header row.
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// Raised when neither the command line nor the config file supply a value.
    #[error("missing required setting '{0}' (pass it as a flag or in the config file)")]
    MissingSetting(&'static str),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
