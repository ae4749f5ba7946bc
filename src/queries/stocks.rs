//! Catalog lookups and analysis.

use std::cell::RefCell;

use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::engine;
use crate::error::Result;
use crate::models::{Analysis, StockRecord};

// ---------------------------------------------------------------------------
// StockQuery
// ---------------------------------------------------------------------------

/// Query interface over the stock catalog.
pub struct StockQuery<'a> {
    catalog: &'a Catalog,
    rng: &'a RefCell<StdRng>,
}

impl<'a> StockQuery<'a> {
    /// Create a new `StockQuery` over `catalog`, drawing cosmetic metrics from `rng`.
    pub fn new(catalog: &'a Catalog, rng: &'a RefCell<StdRng>) -> Self {
        Self { catalog, rng }
    }

    /// Get a stock by ticker (case-insensitive -- uppercased before lookup).
    pub fn get(&self, symbol: &str) -> Result<&'a StockRecord> {
        self.catalog.get(symbol)
    }

    /// Suggestions whose symbol or name contains `query`.
    pub fn search(&self, query: &str) -> Vec<&'a StockRecord> {
        self.catalog.search(query)
    }

    /// Look up `symbol` and run every heuristic over it.
    ///
    /// Fails with [`NotFound`](crate::PennyStockError::NotFound) for an
    /// unknown ticker; no partial result is produced.
    pub fn analyze(&self, symbol: &str) -> Result<Analysis> {
        let stock = self.catalog.get(symbol)?;
        let mut rng = self.rng.borrow_mut();
        Ok(engine::analyze(stock, &mut *rng))
    }

    /// Analyze every catalog entry, in catalog order.
    pub fn analyze_all(&self) -> Vec<Analysis> {
        let mut rng = self.rng.borrow_mut();
        self.catalog
            .iter()
            .map(|stock| engine::analyze(stock, &mut *rng))
            .collect()
    }
}
