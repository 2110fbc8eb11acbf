//! Deterministic synthetic quote generator.
//!
//! Every quote is a pure function of `(symbol, seed, config)`. A fresh
//! `StdRng` is seeded per symbol from the hashed composite key
//! `"{symbol}-{seed}"`, so symbols never share a random stream and a batch
//! can be regenerated field-for-field at any time. All values are drawn in
//! the fixed order below; reordering the draws changes every downstream
//! value, so the sequence is part of the contract:
//!
//! 1. price
//! 2. previous-close offset
//! 3. average volume
//! 4. volume spike multiplier
//! 5. float shares
//! 6. news score
//! 7. breaking flag, headline verb, headline topic

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{FLOAT_SHARES_MIN, GeneratorConfig};
use crate::quote::{Quote, change_percent, round2};
use crate::result::Result;
use crate::symbols::Symbol;

/// Average-volume sampling range (shares).
const AVERAGE_VOLUME_RANGE: (u64, u64) = (10_000, 5_000_000);
/// Previous close deviates from price by at most +/-15%.
const PREVIOUS_CLOSE_OFFSET: f64 = 0.15;
/// Probability that a headline carries the `BREAKING:` prefix.
const BREAKING_PROBABILITY: f64 = 0.25;

const HEADLINE_VERBS: [&str; 4] = ["announces", "secures", "reports", "expands"];
const HEADLINE_TOPICS: [&str; 3] = [
    "FDA approval",
    "a strategic partnership",
    "record quarterly earnings",
];

/// Hash the composite `"{symbol}-{seed}"` key into an RNG seed (FNV-1a).
///
/// The hash is spelled out rather than delegated to `DefaultHasher`, whose
/// algorithm is unspecified and may change between toolchains; the seed
/// derivation has to stay fixed for the pinned generator output to hold.
fn stream_seed(symbol: &Symbol, seed: u64) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let key = format!("{}-{}", symbol, seed);
    let mut hash = FNV_OFFSET_BASIS;
    for byte in key.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Generate the quote for one symbol on one tick.
///
/// Pure and total for a valid `config`; the only error path is
/// `ScanError::InvalidConfig` raised before anything is drawn.
pub fn generate(symbol: &Symbol, seed: u64, config: &GeneratorConfig) -> Result<Quote> {
    config.validate()?;
    Ok(draw_quote(symbol, seed, config))
}

/// Generate one quote per symbol, preserving input order exactly.
///
/// The config is validated once up front; a malformed config can never fail
/// mid-batch.
pub fn generate_batch(
    symbols: &[Symbol],
    seed: u64,
    config: &GeneratorConfig,
) -> Result<Vec<Quote>> {
    config.validate()?;
    Ok(symbols
        .iter()
        .map(|symbol| draw_quote(symbol, seed, config))
        .collect())
}

fn draw_quote(symbol: &Symbol, seed: u64, config: &GeneratorConfig) -> Quote {
    let mut rng = StdRng::seed_from_u64(stream_seed(symbol, seed));

    let price = round2(rng.random_range(config.price_min..=config.price_max));

    let offset = rng.random_range(-PREVIOUS_CLOSE_OFFSET..=PREVIOUS_CLOSE_OFFSET);
    let previous_close = round2(price / (1.0 + offset));
    let change = change_percent(price, previous_close);

    let (avg_lo, avg_hi) = AVERAGE_VOLUME_RANGE;
    let average_volume = rng.random_range(avg_lo..=avg_hi);

    let (mult_lo, mult_hi) = config.volume_multiplier_range;
    let multiplier = rng.random_range(mult_lo..=mult_hi);
    let volume = (average_volume as f64 * multiplier) as u64;

    let float_shares = rng.random_range(FLOAT_SHARES_MIN..=config.float_max);

    let (news_lo, news_hi) = config.news_score_range;
    let news_score = rng.random_range(news_lo..=news_hi);

    let breaking = rng.random_bool(BREAKING_PROBABILITY);
    let verb = HEADLINE_VERBS[rng.random_range(0..HEADLINE_VERBS.len())];
    let topic = HEADLINE_TOPICS[rng.random_range(0..HEADLINE_TOPICS.len())];
    let headline = if breaking {
        format!("BREAKING: {} {} {}", symbol, verb, topic)
    } else {
        format!("{} {} {}", symbol, verb, topic)
    };

    Quote {
        symbol: symbol.clone(),
        price,
        previous_close,
        change_percent: change,
        average_volume,
        volume,
        float_shares,
        news_score,
        headline,
    }
}
