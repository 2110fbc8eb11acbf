//! Cross-tick watchlist transition tracking.
//!
//! The only state the scanner keeps between refresh ticks is the set of
//! symbols that made the previous watchlist. Callers own a `WatchlistState`
//! and thread it through every evaluation; nothing here is global.

use std::collections::HashSet;

use crate::quote::Quote;
use crate::symbols::Symbol;

/// Previous-tick watchlist membership, owned by the refresh loop.
#[derive(Debug, Clone, Default)]
pub struct WatchlistState {
    previous: HashSet<Symbol>,
}

impl WatchlistState {
    /// Fresh state with no previously seen symbols; the first `apply` reports
    /// the whole watchlist as new.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current watchlist and return the symbols that were not on
    /// the previous one, in watchlist order.
    ///
    /// One-shot edge detection: the previous set is replaced wholesale, so a
    /// symbol that drops off and later requalifies alerts again. A non-empty
    /// return is the alert-worthy event.
    pub fn apply(&mut self, watchlist: &[Quote]) -> Vec<Symbol> {
        let current: HashSet<Symbol> = watchlist.iter().map(|q| q.symbol.clone()).collect();
        let new_entries: Vec<Symbol> = watchlist
            .iter()
            .map(|q| &q.symbol)
            .filter(|symbol| !self.previous.contains(*symbol))
            .cloned()
            .collect();
        self.previous = current;
        new_entries
    }

    /// Symbols that made the most recently applied watchlist.
    pub fn previous_symbols(&self) -> &HashSet<Symbol> {
        &self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str) -> Quote {
        Quote {
            symbol: symbol.parse().unwrap(),
            price: 10.0,
            previous_close: 10.0,
            change_percent: 0.0,
            average_volume: 100,
            volume: 1000,
            float_shares: 1_000_000,
            news_score: 5,
            headline: String::new(),
        }
    }

    fn names(symbols: &[Symbol]) -> Vec<&str> {
        symbols.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn first_apply_reports_every_symbol_as_new() {
        let mut state = WatchlistState::new();
        let new_entries = state.apply(&[quote("AAA"), quote("BBB")]);
        assert_eq!(names(&new_entries), vec!["AAA", "BBB"]);
    }

    #[test]
    fn detects_only_newly_qualifying_symbols() {
        let mut state = WatchlistState::new();
        state.apply(&[quote("AAA"), quote("BBB")]);

        let new_entries = state.apply(&[quote("BBB"), quote("CCC")]);
        assert_eq!(names(&new_entries), vec!["CCC"]);
    }

    #[test]
    fn unchanged_watchlist_raises_no_alert() {
        let mut state = WatchlistState::new();
        state.apply(&[quote("AAA"), quote("BBB")]);
        let new_entries = state.apply(&[quote("AAA"), quote("BBB")]);
        assert!(new_entries.is_empty());
    }

    #[test]
    fn requalifying_symbol_alerts_again() {
        let mut state = WatchlistState::new();
        state.apply(&[quote("AAA")]);
        state.apply(&[]);
        let new_entries = state.apply(&[quote("AAA")]);
        assert_eq!(names(&new_entries), vec!["AAA"]);
    }

    #[test]
    fn previous_set_is_replaced_not_accumulated() {
        let mut state = WatchlistState::new();
        state.apply(&[quote("AAA"), quote("BBB")]);
        state.apply(&[quote("CCC")]);
        assert_eq!(state.previous_symbols().len(), 1);
        assert!(state.previous_symbols().contains(&"CCC".parse().unwrap()));
    }
}
