//! Seam between quote production and the filter-rank pipeline.
//!
//! The pipeline consumes any `QuoteSource`, so swapping the synthetic
//! generator for a real market-data feed changes nothing downstream.

use crate::config::GeneratorConfig;
use crate::generator::generate_batch;
use crate::quote::Quote;
use crate::result::Result;
use crate::symbols::Symbol;

/// A producer of one quote batch per tick.
pub trait QuoteSource {
    /// Produce quotes for the given symbols on the given tick.
    ///
    /// Output order follows input symbol order. A source that cannot produce
    /// a quote for one symbol omits that symbol and continues; a single bad
    /// symbol must never abort the batch.
    fn fetch_batch(&self, symbols: &[Symbol], tick: u64) -> Result<Vec<Quote>>;
}

/// Deterministic synthetic feed backed by the generator.
#[derive(Debug, Clone, Default)]
pub struct SyntheticSource {
    config: GeneratorConfig,
}

impl SyntheticSource {
    /// Build a source, validating the generator config up front.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(SyntheticSource { config })
    }

    /// Borrow the generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl QuoteSource for SyntheticSource {
    fn fetch_batch(&self, symbols: &[Symbol], tick: u64) -> Result<Vec<Quote>> {
        generate_batch(symbols, tick, &self.config)
    }
}
