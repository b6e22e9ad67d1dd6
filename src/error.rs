use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// The data file could not be turned into records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `row` is the 1-based data row (header excluded).
    #[error("CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV header is missing the '{column}' column")]
    MissingColumn { column: &'static str },
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// A `date` field that no supported format accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: '{value}' is not a recognised date")]
pub struct ParseError {
    /// 1-based position of the record in the sequence being sorted.
    pub row: usize,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort mode '{0}' (expected createdAt, fileNameAscend or fileNameDescend)")]
pub struct InvalidModeError(pub String);

// ---------------------------------------------------------------------------
// Service boundary
// ---------------------------------------------------------------------------

/// Everything the data service can fail with, tagged by kind.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    InvalidMode(#[from] InvalidModeError),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ServiceError {
    /// Stable snake-case kind sent to clients.
    pub fn error_type(&self) -> &'static str {
        match self {
            ServiceError::Load(_) => "load",
            ServiceError::Parse(_) => "parse",
            ServiceError::InvalidMode(_) => "invalid_mode",
            ServiceError::BadRequest(_) => "bad_request",
        }
    }

    /// HTTP-style status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::InvalidMode(_) | ServiceError::BadRequest(_) => 400,
            ServiceError::Load(_) | ServiceError::Parse(_) => 500,
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
