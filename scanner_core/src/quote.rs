//! Quote data model and shared numeric helpers.
//!
//! A `Quote` is one fabricated (or fetched) market snapshot for a single
//! symbol on a single tick. Field names are stable — the rendering layer
//! binds to them through serde.

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::symbols::Symbol;

/// Market snapshot for a single symbol on a single tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Last traded price.
    pub price: f64,
    /// Previous session close, derived from `price` by a bounded offset.
    pub previous_close: f64,
    /// Percent change versus previous close, rounded to 2 decimals.
    pub change_percent: f64,
    /// Average historical volume (shares).
    pub average_volume: u64,
    /// Current-period volume (shares). Never below `average_volume` for
    /// synthetic quotes.
    pub volume: u64,
    /// Publicly tradeable shares.
    pub float_shares: u64,
    /// Synthetic news/popularity score, `0..=5`.
    pub news_score: u8,
    /// Synthetic headline.
    pub headline: String,
}

impl Quote {
    /// Current volume divided by average volume; `0.0` when the average is
    /// zero (division guard, not an error).
    pub fn volume_ratio(&self) -> f64 {
        if self.average_volume == 0 {
            return 0.0;
        }
        self.volume as f64 / self.average_volume as f64
    }

    /// Composite ranking score: `volume_ratio + |change_percent| + news_score * 2`.
    ///
    /// Rewards volume spikes, volatility, and news intensity at fixed weights;
    /// scanner ranking under `RankKey::BySortScore` depends on this exact blend.
    pub fn sort_score(&self) -> f64 {
        self.volume_ratio() + self.change_percent.abs() + f64::from(self.news_score) * 2.0
    }

    /// Coarse news-intensity bucket for display.
    pub fn news_bucket(&self) -> NewsBucket {
        news_bucket(self.news_score)
    }

    /// Encode the quote to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ScanError> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

/// Round a value to two decimal places (prices and percentages).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percent change from `previous_close` to `price`, rounded to 2 decimals.
///
/// Returns `0.0` when `previous_close` is zero; the zero close is a defined
/// case, not an error.
pub fn change_percent(price: f64, previous_close: f64) -> f64 {
    if previous_close == 0.0 {
        return 0.0;
    }
    round2((price - previous_close) / previous_close * 100.0)
}

/// Display bucket for the news score ladder (0 through 5+).
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsBucket {
    Quiet,
    Mild,
    Warm,
    Hot,
    Blazing,
    Peak,
}

impl NewsBucket {
    /// Short lowercase label for table output.
    pub fn label(&self) -> &'static str {
        match self {
            NewsBucket::Quiet => "quiet",
            NewsBucket::Mild => "mild",
            NewsBucket::Warm => "warm",
            NewsBucket::Hot => "hot",
            NewsBucket::Blazing => "blazing",
            NewsBucket::Peak => "peak",
        }
    }
}

/// Map a news score onto the display ladder. Scores above 5 clamp to `Peak`.
pub fn news_bucket(score: u8) -> NewsBucket {
    match score {
        0 => NewsBucket::Quiet,
        1 => NewsBucket::Mild,
        2 => NewsBucket::Warm,
        3 => NewsBucket::Hot,
        4 => NewsBucket::Blazing,
        _ => NewsBucket::Peak,
    }
}
