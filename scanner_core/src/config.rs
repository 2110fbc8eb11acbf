//! Generator and filter configuration.
//!
//! Both config structs are validated fail-fast with [`validate`] before any
//! batch is produced, so a malformed configuration can never surface halfway
//! through a tick.
//!
//! [`validate`]: GeneratorConfig::validate

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::ScanError;
use crate::result::Result;

/// Smallest float (shares outstanding) the generator will ever sample.
pub const FLOAT_SHARES_MIN: u64 = 500_000;

/// Options for the synthetic quote generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Lower bound for the sampled price.
    pub price_min: f64,
    /// Upper bound for the sampled price.
    pub price_max: f64,
    /// Upper bound for float-shares sampling.
    pub float_max: u64,
    /// `(lo, hi)` range for the volume spike multiplier. `lo >= 1` keeps the
    /// `volume >= average_volume` invariant.
    pub volume_multiplier_range: (f64, f64),
    /// `(lo, hi)` inclusive range for the news score, capped at 5.
    pub news_score_range: (u8, u8),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            price_min: 2.0,
            price_max: 20.0,
            float_max: 20_000_000,
            volume_multiplier_range: (1.0, 15.0),
            news_score_range: (1, 5),
        }
    }
}

impl GeneratorConfig {
    /// Check the configuration for non-finite, inverted, or out-of-range
    /// bounds.
    pub fn validate(&self) -> Result<()> {
        if !self.price_min.is_finite() || !self.price_max.is_finite() {
            return Err(ScanError::InvalidConfig(format!(
                "price bounds must be finite, got ({}, {})",
                self.price_min, self.price_max
            )));
        }
        if self.price_min < 0.0 {
            return Err(ScanError::InvalidConfig(format!(
                "price_min must be non-negative, got {}",
                self.price_min
            )));
        }
        if self.price_max < self.price_min {
            return Err(ScanError::InvalidConfig(format!(
                "price_max ({}) is below price_min ({})",
                self.price_max, self.price_min
            )));
        }
        if self.float_max < FLOAT_SHARES_MIN {
            return Err(ScanError::InvalidConfig(format!(
                "float_max ({}) is below the sampling floor ({})",
                self.float_max, FLOAT_SHARES_MIN
            )));
        }
        let (mult_lo, mult_hi) = self.volume_multiplier_range;
        if !mult_lo.is_finite() || !mult_hi.is_finite() {
            return Err(ScanError::InvalidConfig(format!(
                "volume_multiplier_range ({}, {}) must be finite",
                mult_lo, mult_hi
            )));
        }
        if mult_lo < 1.0 || mult_hi < mult_lo {
            return Err(ScanError::InvalidConfig(format!(
                "volume_multiplier_range ({}, {}) must satisfy 1 <= lo <= hi",
                mult_lo, mult_hi
            )));
        }
        let (news_lo, news_hi) = self.news_score_range;
        if news_hi < news_lo || news_hi > 5 {
            return Err(ScanError::InvalidConfig(format!(
                "news_score_range ({}, {}) must satisfy lo <= hi <= 5",
                news_lo, news_hi
            )));
        }
        Ok(())
    }
}

/// Key used to rank scanner and watchlist rows (descending).
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum RankKey {
    ByChangePercent,
    ByNewsScore,
    #[default]
    BySortScore,
}

/// Threshold rules for the filter-rank pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Lower price bound for watchlist membership.
    pub price_min: f64,
    /// Upper price bound for watchlist membership.
    pub price_max: f64,
    /// Float filter: quotes with `float_shares >= float_max` are excluded.
    pub float_max: u64,
    /// Minimum `volume / average_volume` ratio (volume spike threshold).
    pub min_volume_ratio: f64,
    /// Minimum news score for watchlist membership.
    pub min_news_score: u8,
    /// Optional minimum change percent gate; `None` disables the gate.
    pub min_change_percent: Option<f64>,
    /// Maximum number of watchlist rows. Zero yields an empty watchlist.
    pub watchlist_size: usize,
    /// Ranking key applied to both views.
    pub rank_key: RankKey,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            price_min: 2.0,
            price_max: 20.0,
            float_max: 20_000_000,
            min_volume_ratio: 5.0,
            min_news_score: 3,
            min_change_percent: None,
            watchlist_size: 5,
            rank_key: RankKey::BySortScore,
        }
    }
}

impl FilterConfig {
    /// Check the rules for non-finite, inverted, or out-of-range bounds.
    pub fn validate(&self) -> Result<()> {
        if !self.price_min.is_finite() || !self.price_max.is_finite() {
            return Err(ScanError::InvalidConfig(format!(
                "price bounds must be finite, got ({}, {})",
                self.price_min, self.price_max
            )));
        }
        if self.price_max < self.price_min {
            return Err(ScanError::InvalidConfig(format!(
                "price_max ({}) is below price_min ({})",
                self.price_max, self.price_min
            )));
        }
        if !self.min_volume_ratio.is_finite() || self.min_volume_ratio < 0.0 {
            return Err(ScanError::InvalidConfig(format!(
                "min_volume_ratio must be finite and non-negative, got {}",
                self.min_volume_ratio
            )));
        }
        if let Some(threshold) = self.min_change_percent {
            if !threshold.is_finite() {
                return Err(ScanError::InvalidConfig(format!(
                    "min_change_percent must be finite, got {}",
                    threshold
                )));
            }
        }
        Ok(())
    }
}
