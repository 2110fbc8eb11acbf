//! End-to-end flow: symbol universe -> synthetic source -> pipeline -> views.

use scanner_core::config::{FilterConfig, GeneratorConfig, RankKey};
use scanner_core::pipeline::{evaluate, passes_filters};
use scanner_core::source::{QuoteSource, SyntheticSource};
use scanner_core::symbols::default_universe;
use scanner_core::watchlist::WatchlistState;

#[test]
fn full_tick_flow_over_the_default_universe() {
    let universe = default_universe();
    let source = SyntheticSource::new(GeneratorConfig::default()).unwrap();
    let rules = FilterConfig::default();
    let mut state = WatchlistState::new();

    for tick in 1..=5u64 {
        let quotes = source.fetch_batch(&universe, tick).unwrap();

        // Generation is order-preserving over the universe.
        assert_eq!(quotes.len(), universe.len());
        for (quote, symbol) in quotes.iter().zip(universe.iter()) {
            assert_eq!(&quote.symbol, symbol);
        }

        let outcome = evaluate(&quotes, &rules).unwrap();

        // Scanner is never filtered; the watchlist is bounded and every
        // entry satisfies all predicates.
        assert_eq!(outcome.scanner.len(), quotes.len());
        assert!(outcome.watchlist.len() <= rules.watchlist_size);
        for entry in &outcome.watchlist {
            assert!(passes_filters(entry, &rules));
            assert!(universe.contains(&entry.symbol));
        }

        let new_entries = state.apply(&outcome.watchlist);
        for symbol in &new_entries {
            assert!(outcome.watchlist.iter().any(|q| &q.symbol == symbol));
        }
    }
}

#[test]
fn repeated_ticks_are_reproducible() {
    let universe = default_universe();
    let source = SyntheticSource::new(GeneratorConfig::default()).unwrap();
    let rules = FilterConfig {
        rank_key: RankKey::ByChangePercent,
        ..Default::default()
    };

    let first = evaluate(&source.fetch_batch(&universe, 42).unwrap(), &rules).unwrap();
    let second = evaluate(&source.fetch_batch(&universe, 42).unwrap(), &rules).unwrap();

    assert_eq!(first.scanner, second.scanner);
    assert_eq!(first.watchlist, second.watchlist);
}

#[test]
fn tightened_rules_never_grow_the_watchlist() {
    let universe = default_universe();
    let source = SyntheticSource::new(GeneratorConfig::default()).unwrap();
    let quotes = source.fetch_batch(&universe, 7).unwrap();

    let loose = FilterConfig {
        min_volume_ratio: 1.0,
        min_news_score: 0,
        watchlist_size: universe.len(),
        ..Default::default()
    };
    let tight = FilterConfig {
        min_volume_ratio: 10.0,
        min_news_score: 5,
        watchlist_size: universe.len(),
        ..Default::default()
    };

    let loose_outcome = evaluate(&quotes, &loose).unwrap();
    let tight_outcome = evaluate(&quotes, &tight).unwrap();
    assert!(tight_outcome.watchlist.len() <= loose_outcome.watchlist.len());
    for entry in &tight_outcome.watchlist {
        assert!(loose_outcome.watchlist.contains(entry));
    }
}
