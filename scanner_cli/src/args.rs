//! Command-line arguments for the scanner CLI.
//!
//! This module defines the CLI interface using `clap` and the mapping from
//! flags onto the core config structs. See `main` for end-to-end usage.
use clap::Parser;
use scanner_core::config::{FilterConfig, GeneratorConfig, RankKey};
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Deterministic day-trading scanner", long_about = None)]
pub struct Args {
    /// Path to a text file with the symbol universe.
    /// Symbols may be separated by commas, spaces, or new lines.
    /// The built-in twenty-symbol test universe is used when omitted.
    #[clap(long)]
    pub path: Option<PathBuf>,

    /// Seconds between refresh ticks.
    #[clap(long, default_value_t = 10)]
    pub interval_secs: u64,

    /// Stop after this many ticks (run until Ctrl+C when omitted).
    #[clap(long)]
    pub ticks: Option<u64>,

    /// Lower price bound for generation and the price filter.
    #[clap(long, default_value_t = 2.0)]
    pub price_min: f64,

    /// Upper price bound for generation and the price filter.
    #[clap(long, default_value_t = 20.0)]
    pub price_max: f64,

    /// Float cap (shares) for generation and the float filter.
    #[clap(long, default_value_t = 20_000_000)]
    pub float_max: u64,

    /// Minimum volume / average-volume ratio for watchlist membership.
    #[clap(long, default_value_t = 5.0)]
    pub min_volume_ratio: f64,

    /// Minimum news score for watchlist membership.
    #[clap(long, default_value_t = 3)]
    pub min_news_score: u8,

    /// Minimum change percent for watchlist membership (gate disabled when
    /// omitted).
    #[clap(long)]
    pub min_change_percent: Option<f64>,

    /// Maximum number of watchlist rows.
    #[clap(long, default_value_t = 5)]
    pub watchlist_size: usize,

    /// Ranking key for the scanner and watchlist views.
    #[clap(long, value_enum, default_value_t = RankKey::BySortScore)]
    pub rank_key: RankKey,

    /// Emit one JSON document per tick instead of plain-text tables.
    #[clap(long)]
    pub json: bool,
}

impl Args {
    /// Generator configuration from the CLI flags.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            price_min: self.price_min,
            price_max: self.price_max,
            float_max: self.float_max,
            ..Default::default()
        }
    }

    /// Filter rules from the CLI flags.
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            price_min: self.price_min,
            price_max: self.price_max,
            float_max: self.float_max,
            min_volume_ratio: self.min_volume_ratio,
            min_news_score: self.min_news_score,
            min_change_percent: self.min_change_percent,
            watchlist_size: self.watchlist_size,
            rank_key: self.rank_key,
        }
    }
}
