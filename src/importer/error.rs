// ==========================================
// Sorare MLB Optimizer - import error types
// ==========================================

use thiserror::Error;

/// Import-layer errors. Row-level data problems are not errors: bad
/// rows are skipped and surfaced through the import report.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv is supported)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    // ===== structural errors =====
    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("file has no data rows: {0}")]
    EmptyFile(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
