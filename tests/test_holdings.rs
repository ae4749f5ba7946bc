//! Portfolio and watchlist repository tests.

mod common;

use chrono::Utc;
use pennystock_sdk::config::{PORTFOLIO_KEY, WATCHLIST_KEY};
use pennystock_sdk::holdings::{summarize, Collection, Holdings};
use pennystock_sdk::models::{Liquidity, PortfolioEntry, RiskLevel, WatchlistEntry};
use pennystock_sdk::{KeyValueStore, MemoryStore, PennyStockError, Result};

/// A store whose writes always fail.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(PennyStockError::InvalidArgument(format!("{} is read-only", key)))
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// A store whose reads always fail.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }
}

fn holdings() -> Holdings {
    common::init_logging();
    Holdings::load(Box::new(MemoryStore::new()))
}

// ---------------------------------------------------------------------------
// add / remove
// ---------------------------------------------------------------------------

#[test]
fn add_inserts_with_defaults() {
    let mut h = holdings();
    let before = Utc::now();
    assert!(h.add_to_portfolio(&common::radhika()).unwrap());

    let entry = &h.portfolio().entries()[0];
    assert_eq!(entry.stock.symbol, "RADHIKA");
    assert_eq!(entry.quantity, 0);
    assert_eq!(entry.avg_price, 90.25);
    assert!(entry.date_added >= before && entry.date_added <= Utc::now());
}

#[test]
fn add_same_symbol_twice_is_noop() {
    let mut h = holdings();
    assert!(h.add_to_portfolio(&common::radhika()).unwrap());
    let first = h.portfolio().entries().to_vec();

    let mut changed = common::radhika();
    changed.current_price = 1.0;
    assert!(!h.add_to_portfolio(&changed).unwrap());
    assert_eq!(h.portfolio().entries(), first.as_slice());
}

#[test]
fn insertion_order_is_preserved() {
    let mut h = holdings();
    for symbol in ["ZETA", "ALPHA", "MU"] {
        h.add_to_watchlist(&common::stock(symbol)).unwrap();
    }
    let order: Vec<&str> = h
        .watchlist()
        .entries()
        .iter()
        .map(|e| e.stock.symbol.as_str())
        .collect();
    assert_eq!(order, vec!["ZETA", "ALPHA", "MU"]);
}

#[test]
fn remove_then_remove_again_is_noop() {
    let mut h = holdings();
    h.add_to_portfolio(&common::cellecor()).unwrap();
    h.add_to_portfolio(&common::rajoo()).unwrap();

    assert!(h.remove_from_portfolio("CELLECOR").unwrap());
    assert!(!h.remove_from_portfolio("CELLECOR").unwrap());
    assert_eq!(h.portfolio().len(), 1);
    assert!(h.portfolio().contains("RAJOO"));
}

#[test]
fn add_stores_normalized_symbol() {
    let mut h = holdings();
    assert!(h.add_to_portfolio(&common::stock(" abc ")).unwrap());
    assert_eq!(h.portfolio().entries()[0].stock.symbol, "ABC");
    assert!(h.portfolio().contains("abc"));
    assert!(h.portfolio().contains("ABC"));

    assert!(!h.add_to_portfolio(&common::stock("ABC")).unwrap());
    assert!(h.remove_from_portfolio("Abc").unwrap());
    assert!(h.portfolio().is_empty());
}

#[test]
fn add_rejects_blank_symbol() {
    let mut h = holdings();
    let err = h.add_to_watchlist(&common::stock("   ")).unwrap_err();
    assert!(matches!(err, PennyStockError::InvalidArgument(_)));
    assert!(h.watchlist().is_empty());
}

#[test]
fn removing_absent_symbol_skips_the_write() {
    common::init_logging();
    let mut h = Holdings::load(Box::new(ReadOnlyStore));
    assert!(!h.remove_from_portfolio("RAJOO").unwrap());
}

#[test]
fn removed_symbol_can_be_added_again_at_the_end() {
    let mut h = holdings();
    h.add_to_portfolio(&common::stock("A")).unwrap();
    h.add_to_portfolio(&common::stock("B")).unwrap();
    h.remove_from_portfolio("A").unwrap();
    assert!(h.add_to_portfolio(&common::stock("A")).unwrap());

    let order: Vec<&str> = h
        .portfolio()
        .entries()
        .iter()
        .map(|e| e.stock.symbol.as_str())
        .collect();
    assert_eq!(order, vec!["B", "A"]);
}

#[test]
fn collections_are_independent() {
    let mut h = holdings();
    h.add_to_portfolio(&common::radhika()).unwrap();
    assert!(!h.watchlist().contains("RADHIKA"));

    assert!(h.add_to_watchlist(&common::radhika()).unwrap());
    h.remove_from_portfolio("RADHIKA").unwrap();
    assert!(h.watchlist().contains("RADHIKA"));
    assert!(h.portfolio().is_empty());
}

// ---------------------------------------------------------------------------
// persistence
// ---------------------------------------------------------------------------

#[test]
fn mutations_are_written_through_and_reload() {
    let mut h = holdings();
    h.add_to_portfolio(&common::radhika()).unwrap();
    h.add_to_portfolio(&common::cellecor()).unwrap();
    h.add_to_watchlist(&common::rajoo()).unwrap();
    h.remove_from_portfolio("RADHIKA").unwrap();

    let reloaded = Holdings::load(h.into_store());
    assert_eq!(reloaded.portfolio().len(), 1);
    assert_eq!(reloaded.portfolio().entries()[0].stock.symbol, "CELLECOR");
    assert_eq!(reloaded.watchlist().len(), 1);
    assert_eq!(reloaded.watchlist().entries()[0].stock.symbol, "RAJOO");
}

#[test]
fn persisted_json_uses_camel_case_fields() {
    let mut h = holdings();
    h.add_to_portfolio(&common::radhika()).unwrap();
    let store = h.into_store();

    let raw = store.get(PORTFOLIO_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &json[0];
    assert_eq!(entry["symbol"], "RADHIKA");
    assert_eq!(entry["currentPrice"], 90.25);
    assert_eq!(entry["avgPrice"], 90.25);
    assert_eq!(entry["quantity"], 0);
    assert_eq!(entry["liquidity"], "low");
    assert_eq!(entry["recommendation"], "buy");
    assert!(entry["dateAdded"].is_string());
    assert!(store.get(WATCHLIST_KEY).unwrap().is_none());
}

#[test]
fn loads_entries_written_by_hand() {
    let mut store = MemoryStore::new();
    let raw = serde_json::json!([{
        "symbol": "CELLECOR",
        "name": "Cellecor Gadgets Ltd",
        "currentPrice": 31.6,
        "marketCap": 687.86,
        "exchange": "NSE",
        "volume": 89000,
        "pe": 22.26,
        "pb": 1.8,
        "roe": 24.21,
        "debt": 0.77,
        "sentiment": 0.4,
        "optionable": false,
        "liquidity": "medium",
        "recommendation": "long-term",
        "dateAdded": "2024-03-01T10:15:00.000Z"
    }]);
    store.set(WATCHLIST_KEY, &raw.to_string()).unwrap();

    let h = Holdings::load(Box::new(store));
    let entry: &WatchlistEntry = &h.watchlist().entries()[0];
    assert_eq!(entry.stock, common::cellecor());
    assert_eq!(entry.date_added.to_rfc3339(), "2024-03-01T10:15:00+00:00");
}

#[test]
fn malformed_data_loads_as_empty() {
    let mut store = MemoryStore::new();
    store.set(PORTFOLIO_KEY, "{not json").unwrap();
    store.set(WATCHLIST_KEY, r#"[{"symbol": 5}]"#).unwrap();

    let mut h = Holdings::load(Box::new(store));
    assert!(h.portfolio().is_empty());
    assert!(h.watchlist().is_empty());

    // The next write replaces the bad document.
    h.add_to_portfolio(&common::rajoo()).unwrap();
    let reloaded = Holdings::load(h.into_store());
    assert_eq!(reloaded.portfolio().len(), 1);
}

#[test]
fn duplicate_symbols_in_stored_data_keep_first() {
    let mut store = MemoryStore::new();
    let first = PortfolioEntry {
        stock: common::stock("DUP"),
        date_added: Utc::now(),
        quantity: 5,
        avg_price: 9.0,
    };
    let mut second = first.clone();
    second.quantity = 9;
    store
        .set(PORTFOLIO_KEY, &serde_json::to_string(&vec![first, second]).unwrap())
        .unwrap();

    let h = Holdings::load(Box::new(store));
    assert_eq!(h.portfolio().len(), 1);
    assert_eq!(h.portfolio().get("DUP").unwrap().quantity, 5);
}

#[test]
fn unreadable_store_loads_as_empty() {
    common::init_logging();
    let h = Holdings::load(Box::new(BrokenStore));
    assert!(h.portfolio().is_empty());
    assert!(h.watchlist().is_empty());
}

#[test]
fn failed_write_rolls_back_add() {
    common::init_logging();
    let mut h = Holdings::load(Box::new(ReadOnlyStore));
    let err = h.add_to_portfolio(&common::radhika()).unwrap_err();
    assert!(matches!(err, PennyStockError::InvalidArgument(_)));
    assert!(h.portfolio().is_empty());
}

#[test]
fn collection_add_uses_given_timestamp() {
    let mut store = MemoryStore::new();
    let mut c: Collection<WatchlistEntry> = Collection::load(&store, WATCHLIST_KEY);
    let at = Utc::now() - chrono::Duration::days(3);
    assert!(c.add(&mut store, &common::rajoo(), at).unwrap());
    assert_eq!(c.get("RAJOO").unwrap().date_added, at);
    assert_eq!(c.key(), WATCHLIST_KEY);
    assert_eq!(store.len(), 1);
}

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

fn entries(tiers: &[Liquidity]) -> Vec<PortfolioEntry> {
    tiers
        .iter()
        .enumerate()
        .map(|(i, tier)| {
            let mut s = common::stock(&format!("S{}", i));
            s.liquidity = *tier;
            PortfolioEntry {
                avg_price: s.current_price,
                stock: s,
                date_added: Utc::now(),
                quantity: 0,
            }
        })
        .collect()
}

#[test]
fn empty_summary_uses_sentinels() {
    let s = summarize(&[]);
    assert_eq!(s.count, 0);
    assert_eq!(s.risk_level, None);
    assert_eq!(s.diversification, None);
    assert_eq!(s.risk_label(), "-");
    assert_eq!(s.diversification_label(), "-");
}

#[test]
fn summary_buckets_average_liquidity_weight() {
    assert_eq!(
        summarize(&entries(&[Liquidity::Low])).risk_level,
        Some(RiskLevel::Low)
    );
    // (1 + 2) / 2 = 1.5 -> medium
    assert_eq!(
        summarize(&entries(&[Liquidity::Low, Liquidity::Medium])).risk_level,
        Some(RiskLevel::Medium)
    );
    // (2 + 3) / 2 = 2.5 -> high
    assert_eq!(
        summarize(&entries(&[Liquidity::Medium, Liquidity::High])).risk_level,
        Some(RiskLevel::High)
    );
    // (1 + 1 + 3) / 3 = 1.67 -> medium
    assert_eq!(
        summarize(&entries(&[Liquidity::Low, Liquidity::Low, Liquidity::High])).risk_level,
        Some(RiskLevel::Medium)
    );
}

#[test]
fn diversification_is_twenty_per_holding_capped() {
    assert_eq!(summarize(&entries(&[Liquidity::Low; 1])).diversification, Some(20));
    assert_eq!(summarize(&entries(&[Liquidity::Low; 3])).diversification, Some(60));
    assert_eq!(summarize(&entries(&[Liquidity::Low; 5])).diversification, Some(100));
    let seven = summarize(&entries(&[Liquidity::Low; 7]));
    assert_eq!(seven.count, 7);
    assert_eq!(seven.diversification, Some(100));
    assert_eq!(seven.diversification_label(), "100%");
}

#[test]
fn summary_tracks_live_portfolio() {
    let mut h = holdings();
    h.add_to_portfolio(&common::cellecor()).unwrap();
    h.add_to_watchlist(&common::radhika()).unwrap();

    let s = h.summary();
    assert_eq!(s.count, 1);
    assert_eq!(s.risk_label(), "Medium");
    assert_eq!(s.diversification_label(), "20%");
    assert_eq!(s.to_string(), "holdings=1 risk=Medium diversification=20%");
}
