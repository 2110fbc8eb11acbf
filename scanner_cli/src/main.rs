//! Day-trading scanner CLI.
//!
//! Drives the core scan loop: on every refresh tick it fabricates a
//! deterministic quote batch for the symbol universe through the
//! `QuoteSource` seam, runs the filter-rank pipeline, detects watchlist
//! transitions, and prints the resulting views as plain-text tables or JSON.
//!
//! Usage example:
//! ```bash
//! scanner_cli --path ./symbols.txt --interval-secs 10 --rank-key by-sort-score
//! ```
//!
//! The symbol file may separate symbols with commas, spaces, or new lines;
//! without `--path` the built-in twenty-symbol test universe is scanned.
//! The loop runs until Ctrl+C, or for `--ticks` iterations when given.
#![warn(missing_docs)]
mod args;
mod report;

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::{Receiver, bounded, select, tick};
use log::{info, warn};

use scanner_core::config::FilterConfig;
use scanner_core::pipeline::evaluate;
use scanner_core::source::{QuoteSource, SyntheticSource};
use scanner_core::symbols::{Symbol, SymbolParser, default_universe};
use scanner_core::watchlist::WatchlistState;
use scanner_core::{Result, ScanError};

use crate::args::Args;
use crate::report::TickReport;

fn main() -> Result<(), ScanError> {
    init_logger();
    let args = Args::parse();

    let symbols = load_universe(&args)?;
    if symbols.is_empty() {
        warn!("Symbol universe is empty; every tick will produce empty views.");
    }

    // Fail fast on malformed configuration, before the loop starts.
    let source = SyntheticSource::new(args.generator_config())?;
    let rules = args.filter_config();
    rules.validate()?;

    info!(
        "Scanning {} symbols every {}s, rank key: {}, watchlist size: {}",
        symbols.len(),
        args.interval_secs,
        rules.rank_key,
        rules.watchlist_size
    );

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.try_send(());
    })
    .expect("Error setting Ctrl+C handler");

    run_loop(&args, &symbols, &source, &rules, shutdown_rx)
}

/// Load the symbol universe from `--path`, or fall back to the built-in one.
fn load_universe(args: &Args) -> Result<Vec<Symbol>, ScanError> {
    match &args.path {
        Some(path) => {
            let file = File::open(path).map_err(ScanError::Io)?;
            let symbols = Symbol::parse_from_reader(BufReader::new(file))?;
            info!("Loaded {} symbols from {}", symbols.len(), path.display());
            Ok(symbols)
        }
        None => {
            info!("No symbol file given; using the built-in test universe.");
            Ok(default_universe())
        }
    }
}

/// Refresh loop: evaluate one tick immediately, then once per interval until
/// shutdown or the optional tick bound.
fn run_loop(
    args: &Args,
    symbols: &[Symbol],
    source: &dyn QuoteSource,
    rules: &FilterConfig,
    shutdown_rx: Receiver<()>,
) -> Result<(), ScanError> {
    let ticker = tick(Duration::from_secs(args.interval_secs.max(1)));
    let mut state = WatchlistState::new();
    let mut iteration: u64 = 0;

    loop {
        iteration += 1;
        run_tick(iteration, symbols, source, rules, &mut state, args.json)?;

        if let Some(max_ticks) = args.ticks {
            if iteration >= max_ticks {
                info!("Completed {} ticks.", max_ticks);
                break;
            }
        }

        select! {
            recv(shutdown_rx) -> _ => {
                info!("Ctrl+C received. Shutting down scanner...");
                break;
            }
            recv(ticker) -> _ => {}
        }
    }
    Ok(())
}

/// Evaluate and print a single tick.
fn run_tick(
    iteration: u64,
    symbols: &[Symbol],
    source: &dyn QuoteSource,
    rules: &FilterConfig,
    state: &mut WatchlistState,
    json: bool,
) -> Result<(), ScanError> {
    let quotes = source.fetch_batch(symbols, iteration)?;
    let outcome = evaluate(&quotes, rules)?;
    let new_entries = state.apply(&outcome.watchlist);

    if !new_entries.is_empty() {
        let names: Vec<&str> = new_entries.iter().map(|s| s.as_str()).collect();
        info!("ALERT: new watchlist entries: {}", names.join(", "));
    }

    let report = TickReport::new(iteration, outcome, new_entries);
    if json {
        println!("{}", report.to_json()?);
    } else {
        report.print();
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
