//! Ticker symbols and universe parsing shared between the generator and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::ScanError;

/// A validated ticker symbol.
///
/// Always uppercase, non-empty ASCII; letters, digits, `.` and `-` are
/// accepted so real-world tickers like `BRK.B` parse. Symbols are unique
/// within one universe; `parse_from_reader` enforces that.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Borrow the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ScanError::InvalidSymbol("empty symbol".to_string()));
        }
        let valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
        if !valid {
            return Err(ScanError::InvalidSymbol(trimmed.to_string()));
        }
        Ok(Symbol(trimmed.to_ascii_uppercase()))
    }
}

/// Trait providing file parsing for symbol universes.
pub trait SymbolParser {
    /// Parses a symbol universe from a buffered reader.
    ///
    /// Symbols may be separated by commas, spaces, or new lines. Input order
    /// is preserved; duplicates and unparseable tokens are errors.
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Symbol>, ScanError>;
}

impl SymbolParser for Symbol {
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>, ScanError> {
        let mut symbols = Vec::new();
        let mut seen: HashSet<Symbol> = HashSet::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(ScanError::Io)?;
            for token in line.split([',', ' ', '\t']) {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                let symbol = token
                    .parse::<Symbol>()
                    .map_err(|e| ScanError::ParseSymbolsFile(e.to_string()))?;
                if !seen.insert(symbol.clone()) {
                    return Err(ScanError::ParseSymbolsFile(format!(
                        "duplicate symbol: {}",
                        symbol
                    )));
                }
                symbols.push(symbol);
            }
        }
        Ok(symbols)
    }
}

/// The built-in twenty-symbol test universe (`AAA` through `TTT`).
pub fn default_universe() -> Vec<Symbol> {
    [
        "AAA", "BBB", "CCC", "DDD", "EEE", "FFF", "GGG", "HHH", "III", "JJJ",
        "KKK", "LLL", "MMM", "NNN", "OOO", "PPP", "QQQ", "RRR", "SSS", "TTT",
    ]
    .iter()
    .map(|s| Symbol(s.to_string()))
    .collect()
}
