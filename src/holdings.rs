//! Repository owning the persisted portfolio and watchlist.
//!
//! Both collections are loaded once from the injected [`KeyValueStore`] and
//! written back in full after every change. Within a collection symbols are
//! unique and insertion order is display order; the two collections are
//! independent of each other. Symbols are stored and looked up in their
//! normalized (trimmed, uppercase) form.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::catalog::normalize_symbol;
use crate::config::{PORTFOLIO_KEY, WATCHLIST_KEY};
use crate::error::Result;
use crate::models::{
    HoldingEntry, PortfolioEntry, PortfolioSummary, RiskLevel, StockRecord, WatchlistEntry,
};
use crate::store::KeyValueStore;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// An ordered, symbol-unique list of entries persisted under one store key.
#[derive(Debug, Clone)]
pub struct Collection<E> {
    key: &'static str,
    entries: Vec<E>,
}

impl<E: HoldingEntry> Collection<E> {
    /// Load the collection stored under `key`.
    ///
    /// Missing, unreadable or malformed data yields an empty collection.
    pub fn load(store: &dyn KeyValueStore, key: &'static str) -> Self {
        let entries = match store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<E>>(&raw) {
                Ok(entries) => dedup_by_symbol(entries),
                Err(e) => {
                    warn!("Discarding malformed '{}' data: {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read '{}' from store: {}", key, e);
                Vec::new()
            }
        };
        Self { key, entries }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn get(&self, symbol: &str) -> Option<&E> {
        let symbol = symbol.trim().to_uppercase();
        self.entries.iter().find(|e| e.symbol() == symbol)
    }

    /// Append an entry for `stock` unless its symbol is already present.
    ///
    /// The stored entry carries the normalized symbol; a blank symbol is
    /// rejected with [`PennyStockError::InvalidArgument`].
    ///
    /// Returns `Ok(true)` if the entry was inserted and persisted. If the
    /// write fails the insert is rolled back and the error returned.
    ///
    /// [`PennyStockError::InvalidArgument`]: crate::PennyStockError::InvalidArgument
    pub fn add(
        &mut self,
        store: &mut dyn KeyValueStore,
        stock: &StockRecord,
        added_at: DateTime<Utc>,
    ) -> Result<bool> {
        let symbol = normalize_symbol(&stock.symbol)?;
        if self.contains(&symbol) {
            return Ok(false);
        }
        let stock = if symbol == stock.symbol {
            Cow::Borrowed(stock)
        } else {
            Cow::Owned(StockRecord {
                symbol,
                ..stock.clone()
            })
        };
        self.entries.push(E::from_stock(&stock, added_at));
        if let Err(e) = self.persist(store) {
            self.entries.pop();
            return Err(e);
        }
        info!("{} added to {}", stock.symbol, self.key);
        Ok(true)
    }

    /// Remove the entry for `symbol` if present and persist the result.
    ///
    /// Returns `Ok(true)` if an entry was removed. An absent symbol leaves
    /// the collection and the store untouched. If the write fails the entry
    /// is restored and the error returned.
    pub fn remove(&mut self, store: &mut dyn KeyValueStore, symbol: &str) -> Result<bool> {
        let symbol = symbol.trim().to_uppercase();
        let Some(idx) = self.entries.iter().position(|e| e.symbol() == symbol) else {
            return Ok(false);
        };
        let entry = self.entries.remove(idx);
        if let Err(e) = self.persist(store) {
            self.entries.insert(idx, entry);
            return Err(e);
        }
        info!("{} removed from {}", symbol, self.key);
        Ok(true)
    }

    fn persist(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        store.set(self.key, &json)
    }
}

// Keep the first occurrence of each symbol from hand-edited or legacy data.
fn dedup_by_symbol<E: HoldingEntry>(entries: Vec<E>) -> Vec<E> {
    let mut out: Vec<E> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !out.iter().any(|e| e.symbol() == entry.symbol()) {
            out.push(entry);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Holdings
// ---------------------------------------------------------------------------

/// Owns the store and both persisted collections.
pub struct Holdings {
    store: Box<dyn KeyValueStore>,
    portfolio: Collection<PortfolioEntry>,
    watchlist: Collection<WatchlistEntry>,
}

impl Holdings {
    /// Load both collections from `store`.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let portfolio = Collection::load(store.as_ref(), PORTFOLIO_KEY);
        let watchlist = Collection::load(store.as_ref(), WATCHLIST_KEY);
        Self {
            store,
            portfolio,
            watchlist,
        }
    }

    pub fn portfolio(&self) -> &Collection<PortfolioEntry> {
        &self.portfolio
    }

    pub fn watchlist(&self) -> &Collection<WatchlistEntry> {
        &self.watchlist
    }

    pub fn add_to_portfolio(&mut self, stock: &StockRecord) -> Result<bool> {
        self.portfolio.add(self.store.as_mut(), stock, Utc::now())
    }

    pub fn add_to_watchlist(&mut self, stock: &StockRecord) -> Result<bool> {
        self.watchlist.add(self.store.as_mut(), stock, Utc::now())
    }

    pub fn remove_from_portfolio(&mut self, symbol: &str) -> Result<bool> {
        self.portfolio.remove(self.store.as_mut(), symbol)
    }

    pub fn remove_from_watchlist(&mut self, symbol: &str) -> Result<bool> {
        self.watchlist.remove(self.store.as_mut(), symbol)
    }

    pub fn summary(&self) -> PortfolioSummary {
        summarize(self.portfolio.entries())
    }

    /// Give back the underlying store, e.g. to reload it elsewhere.
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }
}

/// Headline statistics over a portfolio.
///
/// Risk level averages each holding's liquidity weight and buckets the
/// result (`< 1.5` low, `< 2.5` medium, otherwise high). Diversification is
/// 20 points per holding, capped at 100. Both are `None` when empty.
pub fn summarize(entries: &[PortfolioEntry]) -> PortfolioSummary {
    let count = entries.len();
    if count == 0 {
        return PortfolioSummary {
            count,
            risk_level: None,
            diversification: None,
        };
    }

    let total: u32 = entries
        .iter()
        .map(|e| e.stock.liquidity.risk_weight())
        .sum();
    let avg = f64::from(total) / count as f64;
    let risk_level = if avg < 1.5 {
        RiskLevel::Low
    } else if avg < 2.5 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    PortfolioSummary {
        count,
        risk_level: Some(risk_level),
        diversification: Some(count.saturating_mul(20).min(100) as u8),
    }
}
