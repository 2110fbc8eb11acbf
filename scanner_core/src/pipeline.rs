//! Filter-rank pipeline deriving the scanner and watchlist views.
//!
//! Evaluation is a pure function of the input batch and the rules. The
//! scanner is the whole batch ranked; the watchlist is the predicate-passing
//! subset, ranked and truncated. All sorts are stable and descending, so
//! ties keep input order and row numbering stays meaningful downstream.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::{FilterConfig, RankKey};
use crate::quote::Quote;
use crate::result::Result;

/// Result of one pipeline evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Every input quote, ranked descending by the configured key.
    pub scanner: Vec<Quote>,
    /// Quotes passing all alert predicates, ranked and truncated to the
    /// configured watchlist size.
    pub watchlist: Vec<Quote>,
}

/// Evaluate one batch against the rules.
///
/// An empty batch yields empty views, not an error; the only failure is a
/// malformed `FilterConfig`, rejected before any quote is inspected.
pub fn evaluate(quotes: &[Quote], rules: &FilterConfig) -> Result<ScanOutcome> {
    rules.validate()?;

    let mut scanner = quotes.to_vec();
    rank(&mut scanner, rules.rank_key);

    let mut watchlist: Vec<Quote> = quotes
        .iter()
        .filter(|quote| passes_filters(quote, rules))
        .cloned()
        .collect();
    rank(&mut watchlist, rules.rank_key);
    watchlist.truncate(rules.watchlist_size);

    Ok(ScanOutcome { scanner, watchlist })
}

/// Watchlist membership predicate. All rules must hold; the change-percent
/// gate applies only when configured.
pub fn passes_filters(quote: &Quote, rules: &FilterConfig) -> bool {
    if quote.price < rules.price_min || quote.price > rules.price_max {
        return false;
    }
    if quote.news_score < rules.min_news_score {
        return false;
    }
    if quote.volume_ratio() < rules.min_volume_ratio {
        return false;
    }
    if quote.float_shares >= rules.float_max {
        return false;
    }
    if let Some(threshold) = rules.min_change_percent {
        if quote.change_percent < threshold {
            return false;
        }
    }
    true
}

fn rank_value(quote: &Quote, key: RankKey) -> f64 {
    match key {
        RankKey::ByChangePercent => quote.change_percent,
        RankKey::ByNewsScore => f64::from(quote.news_score),
        RankKey::BySortScore => quote.sort_score(),
    }
}

// Stable descending sort; rank values are finite by construction, so the
// NaN fallback never reorders anything.
fn rank(quotes: &mut [Quote], key: RankKey) {
    quotes.sort_by(|a, b| {
        rank_value(b, key)
            .partial_cmp(&rank_value(a, key))
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol;

    fn quote(
        symbol: &str,
        price: f64,
        average_volume: u64,
        volume: u64,
        float_shares: u64,
        news_score: u8,
        change_percent: f64,
    ) -> Quote {
        let symbol: Symbol = symbol.parse().unwrap();
        Quote {
            symbol,
            price,
            previous_close: price,
            change_percent,
            average_volume,
            volume,
            float_shares,
            news_score,
            headline: String::new(),
        }
    }

    fn passing_quote(symbol: &str) -> Quote {
        quote(symbol, 10.0, 100, 1000, 1_000_000, 5, 12.0)
    }

    #[test]
    fn empty_batch_yields_empty_views() {
        let outcome = evaluate(&[], &FilterConfig::default()).unwrap();
        assert!(outcome.scanner.is_empty());
        assert!(outcome.watchlist.is_empty());
    }

    #[test]
    fn scanner_always_contains_every_quote() {
        let quotes = vec![
            passing_quote("AAA"),
            quote("BBB", 100.0, 100, 100, 50_000_000, 0, 0.0),
            quote("CCC", 0.5, 0, 0, 1_000_000, 1, -3.0),
        ];
        let outcome = evaluate(&quotes, &FilterConfig::default()).unwrap();
        assert_eq!(outcome.scanner.len(), quotes.len());
    }

    #[test]
    fn volume_ratio_threshold_scenario() {
        // Ratios 2, 4 and 6 against a threshold of 5: only the third passes.
        let quotes = vec![
            quote("AAA", 10.0, 50, 100, 1_000_000, 5, 0.0),
            quote("BBB", 10.0, 50, 200, 1_000_000, 5, 0.0),
            quote("CCC", 10.0, 50, 300, 1_000_000, 5, 0.0),
        ];
        let rules = FilterConfig {
            min_volume_ratio: 5.0,
            ..Default::default()
        };
        let outcome = evaluate(&quotes, &rules).unwrap();
        assert_eq!(outcome.watchlist.len(), 1);
        assert_eq!(outcome.watchlist[0].symbol.as_str(), "CCC");
    }

    #[test]
    fn watchlist_respects_every_predicate() {
        let rules = FilterConfig::default();
        let quotes = vec![
            passing_quote("AAA"),
            quote("LOW", 1.0, 100, 1000, 1_000_000, 5, 12.0), // below price_min
            quote("BIG", 10.0, 100, 1000, 20_000_000, 5, 12.0), // float at cap
            quote("DIM", 10.0, 100, 1000, 1_000_000, 2, 12.0), // weak news
            quote("FLT", 10.0, 100, 400, 1_000_000, 5, 12.0), // ratio 4 < 5
        ];
        let outcome = evaluate(&quotes, &rules).unwrap();
        let names: Vec<&str> = outcome
            .watchlist
            .iter()
            .map(|q| q.symbol.as_str())
            .collect();
        assert_eq!(names, vec!["AAA"]);
        for entry in &outcome.watchlist {
            assert!(passes_filters(entry, &rules));
        }
    }

    #[test]
    fn change_percent_gate_only_applies_when_configured() {
        let slow_mover = quote("SLW", 10.0, 100, 1000, 1_000_000, 5, 2.0);

        let ungated = FilterConfig::default();
        assert!(passes_filters(&slow_mover, &ungated));

        let gated = FilterConfig {
            min_change_percent: Some(10.0),
            ..Default::default()
        };
        assert!(!passes_filters(&slow_mover, &gated));
        assert!(passes_filters(&passing_quote("FST"), &gated));
    }

    #[test]
    fn zero_average_volume_fails_the_ratio_gate() {
        let dead = quote("DED", 10.0, 0, 1000, 1_000_000, 5, 12.0);
        assert!(!passes_filters(&dead, &FilterConfig::default()));
    }

    #[test]
    fn watchlist_is_bounded_by_configured_size() {
        let quotes: Vec<Quote> = (0..10)
            .map(|i| passing_quote(&format!("S{}", i)))
            .collect();
        let rules = FilterConfig {
            watchlist_size: 3,
            ..Default::default()
        };
        let outcome = evaluate(&quotes, &rules).unwrap();
        assert_eq!(outcome.watchlist.len(), 3);
        assert_eq!(outcome.scanner.len(), 10);
    }

    #[test]
    fn zero_watchlist_size_yields_empty_watchlist() {
        let rules = FilterConfig {
            watchlist_size: 0,
            ..Default::default()
        };
        let outcome = evaluate(&[passing_quote("AAA")], &rules).unwrap();
        assert!(outcome.watchlist.is_empty());
        assert_eq!(outcome.scanner.len(), 1);
    }

    #[test]
    fn sort_score_ranking_uses_the_composite_blend() {
        // Scores: AAA = 10 + 0 + 2 = 12, BBB = 1 + 5 + 10 = 16, CCC = 2 + 1 + 4 = 7.
        let quotes = vec![
            quote("AAA", 10.0, 100, 1000, 1_000_000, 1, 0.0),
            quote("BBB", 10.0, 100, 100, 1_000_000, 5, -5.0),
            quote("CCC", 10.0, 100, 200, 1_000_000, 2, 1.0),
        ];
        let rules = FilterConfig {
            rank_key: RankKey::BySortScore,
            ..Default::default()
        };
        let outcome = evaluate(&quotes, &rules).unwrap();
        let names: Vec<&str> = outcome.scanner.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(names, vec!["BBB", "AAA", "CCC"]);
    }

    #[test]
    fn change_percent_ranking_is_descending() {
        let quotes = vec![
            quote("AAA", 10.0, 100, 100, 1_000_000, 1, 3.0),
            quote("BBB", 10.0, 100, 100, 1_000_000, 1, 15.0),
            quote("CCC", 10.0, 100, 100, 1_000_000, 1, -2.0),
        ];
        let rules = FilterConfig {
            rank_key: RankKey::ByChangePercent,
            ..Default::default()
        };
        let outcome = evaluate(&quotes, &rules).unwrap();
        let names: Vec<&str> = outcome.scanner.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(names, vec!["BBB", "AAA", "CCC"]);
    }

    #[test]
    fn news_score_ranking_breaks_ties_by_input_order() {
        let quotes = vec![
            quote("AAA", 10.0, 100, 100, 1_000_000, 3, 0.0),
            quote("BBB", 10.0, 100, 100, 1_000_000, 5, 0.0),
            quote("CCC", 10.0, 100, 100, 1_000_000, 3, 0.0),
        ];
        let rules = FilterConfig {
            rank_key: RankKey::ByNewsScore,
            ..Default::default()
        };
        let outcome = evaluate(&quotes, &rules).unwrap();
        let names: Vec<&str> = outcome.scanner.iter().map(|q| q.symbol.as_str()).collect();
        // BBB first, then the two threes in their original order.
        assert_eq!(names, vec!["BBB", "AAA", "CCC"]);
    }

    #[test]
    fn invalid_rules_fail_before_evaluation() {
        let rules = FilterConfig {
            price_min: 20.0,
            price_max: 2.0,
            ..Default::default()
        };
        assert!(evaluate(&[passing_quote("AAA")], &rules).is_err());
    }
}
