//! Error types shared between the scanner core and the CLI.
//!
//! The `ScanError` enum unifies the few failure cases this workspace has —
//! configuration validation, symbol-universe parsing, I/O and JSON encoding —
//! so callers can propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type for the scanner workspace.
#[derive(Error, Debug)]
pub enum ScanError {
    /// I/O error originating from the standard library (symbol files, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed generator or filter configuration, caught before any batch
    /// is produced (inverted bounds, out-of-range thresholds, and the like).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A ticker symbol failed validation (empty or non-alphanumeric).
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Error while parsing the symbol-universe file.
    #[error("Parse symbols file error: {0}")]
    ParseSymbolsFile(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
