//! Error types for the catalog crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that abort a whole catalog or recommendation load.
///
/// Individual malformed entries never produce one of these; they are
/// skipped and reported alongside the entries that did load.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Source file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Source is not valid JSON
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("Expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),
}

/// Error code for integration with dishfinder-core error handling.
/// Range: 11xxx for catalog errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    /// Source file could not be read
    Io = 11001,
    /// JSON parsing error
    JsonParsing = 11002,
    /// Top-level value has the wrong shape
    NotAnObject = 11003,
}

impl CatalogError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CatalogErrorCode {
        match self {
            CatalogError::Io { .. } => CatalogErrorCode::Io,
            CatalogError::JsonError(_) => CatalogErrorCode::JsonParsing,
            CatalogError::NotAnObject(_) => CatalogErrorCode::NotAnObject,
        }
    }

    /// True when the source file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Human-readable name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Read a source file, attaching its path to any failure.
pub(crate) fn read_source(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
