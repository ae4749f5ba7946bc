//! Shared test fixtures for the penny stock SDK integration tests.
//!
//! Provides a baseline `StockRecord` that raises no risk flags, accessors for
//! the sample catalog records, and SDK constructors over a `MemoryStore` or a
//! temporary directory.

#![allow(dead_code)]

use pennystock_sdk::models::{Liquidity, Recommendation, StockRecord};
use pennystock_sdk::{Catalog, PennyStockSdk};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A record that trips none of the scoring bonuses except medium liquidity
/// and raises no risk flags.
///
/// Confidence 60, classified "Intraday Possible", single low-risk flag.
pub fn stock(symbol: &str) -> StockRecord {
    StockRecord {
        symbol: symbol.to_string(),
        name: format!("{} Industries Ltd", symbol),
        current_price: 10.0,
        market_cap: 100.0,
        exchange: "NSE".to_string(),
        volume: 60_000,
        pe: 25.0,
        pb: 1.5,
        roe: 10.0,
        debt: 0.6,
        sentiment: 0.5,
        optionable: true,
        liquidity: Liquidity::Medium,
        recommendation: Recommendation::Watchlist,
    }
}

pub fn sample(symbol: &str) -> StockRecord {
    Catalog::sample().get(symbol).unwrap().clone()
}

pub fn rajoo() -> StockRecord {
    sample("RAJOO")
}

pub fn cellecor() -> StockRecord {
    sample("CELLECOR")
}

pub fn radhika() -> StockRecord {
    sample("RADHIKA")
}

/// SDK over an in-memory store with a fixed metrics seed.
pub fn memory_sdk() -> PennyStockSdk {
    init_logging();
    PennyStockSdk::builder()
        .in_memory(true)
        .seed(7)
        .build()
        .unwrap()
}

/// SDK over a file store in a fresh temp directory.
///
/// Returns `(PennyStockSdk, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test.
pub fn file_sdk() -> (PennyStockSdk, tempfile::TempDir) {
    init_logging();
    let tmp_dir = tempfile::tempdir().unwrap();
    let sdk = PennyStockSdk::builder()
        .store_dir(tmp_dir.path())
        .seed(7)
        .build()
        .unwrap();
    (sdk, tmp_dir)
}
