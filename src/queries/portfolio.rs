//! Portfolio operations backed by the persisted [`Holdings`].

use std::cell::RefCell;

use crate::error::Result;
use crate::holdings::Holdings;
use crate::models::{PortfolioEntry, PortfolioSummary, StockRecord};

// ---------------------------------------------------------------------------
// PortfolioQuery
// ---------------------------------------------------------------------------

/// Interface for adding, removing and summarizing portfolio holdings.
pub struct PortfolioQuery<'a> {
    holdings: &'a RefCell<Holdings>,
}

impl<'a> PortfolioQuery<'a> {
    /// Create a new `PortfolioQuery` bound to the given holdings.
    pub fn new(holdings: &'a RefCell<Holdings>) -> Self {
        Self { holdings }
    }

    /// Add `stock` with quantity 0 and its current price as average cost.
    ///
    /// Returns `false` (and leaves the portfolio untouched) if the symbol is
    /// already held.
    pub fn add(&self, stock: &StockRecord) -> Result<bool> {
        self.holdings.borrow_mut().add_to_portfolio(stock)
    }

    /// Remove the holding for `symbol`. Returns `false` if it was not held.
    pub fn remove(&self, symbol: &str) -> Result<bool> {
        self.holdings
            .borrow_mut()
            .remove_from_portfolio(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.holdings
            .borrow()
            .portfolio()
            .contains(symbol)
    }

    /// All holdings in insertion order.
    pub fn list(&self) -> Vec<PortfolioEntry> {
        self.holdings.borrow().portfolio().entries().to_vec()
    }

    pub fn len(&self) -> usize {
        self.holdings.borrow().portfolio().len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.borrow().portfolio().is_empty()
    }

    /// Holding count, bucketed liquidity risk and diversification score.
    pub fn summary(&self) -> PortfolioSummary {
        self.holdings.borrow().summary()
    }
}
