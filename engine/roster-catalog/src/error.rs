//! Error types for the roster catalog

use thiserror::Error;

/// Result type for catalog loading
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Structural failures that abort a roster load.
///
/// No partial catalog is ever returned alongside one of these.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Roster source is missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("Roster source must be a JSON array of row objects")]
    NotAnArray,

    #[error("Unsupported roster format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Recoverable price parsing failures.
///
/// The catalog stores price 0 for the row and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    #[error("price is empty")]
    Empty,

    #[error("price {input:?} is not a number")]
    Invalid { input: String },

    #[error("price is not a finite number")]
    NonFinite,

    #[error("price {input:?} is negative")]
    Negative { input: String },
}
