//! Per-tick report assembly and printing.
//!
//! A `TickReport` bundles everything one refresh tick produced: the ranked
//! views, the newly-qualifying symbols, and the alert flag. It prints as
//! plain-text tables or serializes to a single JSON document.
use chrono::Utc;
use serde::Serialize;

use scanner_core::pipeline::ScanOutcome;
use scanner_core::{Quote, ScanError, Symbol};

/// Everything produced by one refresh tick.
#[derive(Debug, Serialize)]
pub struct TickReport {
    /// Refresh-tick counter (the iteration seed).
    pub iteration: u64,
    /// Wall-clock time the tick was evaluated, RFC 3339.
    pub generated_at: String,
    /// True when at least one symbol newly entered the watchlist.
    pub alert: bool,
    /// Symbols that entered the watchlist this tick, in watchlist order.
    pub new_entries: Vec<Symbol>,
    /// Bounded, filtered, ranked watchlist.
    pub watchlist: Vec<Quote>,
    /// Full ranked scanner view.
    pub scanner: Vec<Quote>,
}

impl TickReport {
    /// Assemble a report from a pipeline outcome.
    pub fn new(iteration: u64, outcome: ScanOutcome, new_entries: Vec<Symbol>) -> Self {
        TickReport {
            iteration,
            generated_at: Utc::now().to_rfc3339(),
            alert: !new_entries.is_empty(),
            new_entries,
            watchlist: outcome.watchlist,
            scanner: outcome.scanner,
        }
    }

    /// Encode the whole tick as one JSON document.
    pub fn to_json(&self) -> Result<String, ScanError> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }

    /// Print the tick as plain-text tables.
    pub fn print(&self) {
        println!(
            "=== Tick {} @ {} ===",
            self.iteration, self.generated_at
        );
        if self.alert {
            let names: Vec<&str> = self.new_entries.iter().map(|s| s.as_str()).collect();
            println!("ALERT: new watchlist entries: {}", names.join(", "));
        }

        println!("-- Watchlist ({} rows) --", self.watchlist.len());
        print_table(&self.watchlist);

        println!("-- Scanner ({} rows) --", self.scanner.len());
        print_table(&self.scanner);
        println!();
    }
}

fn print_table(quotes: &[Quote]) {
    if quotes.is_empty() {
        println!("  (empty)");
        return;
    }
    println!(
        "  {:>3}  {:<6} {:>8} {:>8} {:>7} {:>12} {:>12} {:>5} {:<8} {}",
        "#", "Symbol", "Price", "Chg%", "VolX", "Volume", "Float", "News", "Heat", "Headline"
    );
    for (index, quote) in quotes.iter().enumerate() {
        println!(
            "  {:>3}  {:<6} {:>8.2} {:>8.2} {:>7.1} {:>12} {:>12} {:>5} {:<8} {}",
            index + 1,
            quote.symbol,
            quote.price,
            quote.change_percent,
            quote.volume_ratio(),
            quote.volume,
            quote.float_shares,
            quote.news_score,
            quote.news_bucket().label(),
            quote.headline,
        );
    }
}
