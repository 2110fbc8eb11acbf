//!
//! Core types and logic for the deterministic day-trading scanner.
//!
//! This crate aggregates:
//! - `error` — unified error type `ScanError` used across the workspace.
//! - `result` — handy `Result<T, ScanError>` alias.
//! - `symbols` — validated ticker symbols and universe parsing.
//! - `config` — generator/filter configuration with fail-fast validation.
//! - `quote` — the `Quote` record and shared numeric helpers.
//! - `generator` — deterministic synthetic quote generator.
//! - `source` — `QuoteSource` seam between quote feeds and the pipeline.
//! - `pipeline` — filter/rank pipeline producing scanner and watchlist views.
//! - `watchlist` — cross-tick watchlist transition tracking.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod symbols;
pub mod config;
pub mod quote;
pub mod generator;
pub mod source;
pub mod pipeline;
pub mod watchlist;

pub use error::ScanError;
pub use result::Result;
pub use quote::Quote;
pub use symbols::Symbol;
