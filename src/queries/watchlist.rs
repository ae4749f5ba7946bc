use std::cell::RefCell;

use crate::error::Result;
use crate::holdings::Holdings;
use crate::models::{StockRecord, WatchlistEntry};

/// Interface for the watchlist. Same uniqueness rules as the portfolio, kept
/// in a separate collection.
pub struct WatchlistQuery<'a> {
    holdings: &'a RefCell<Holdings>,
}

impl<'a> WatchlistQuery<'a> {
    pub fn new(holdings: &'a RefCell<Holdings>) -> Self {
        Self { holdings }
    }

    /// Start watching `stock`. Returns `false` if it is already watched.
    pub fn add(&self, stock: &StockRecord) -> Result<bool> {
        self.holdings.borrow_mut().add_to_watchlist(stock)
    }

    pub fn remove(&self, symbol: &str) -> Result<bool> {
        self.holdings
            .borrow_mut()
            .remove_from_watchlist(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.holdings
            .borrow()
            .watchlist()
            .contains(symbol)
    }

    pub fn list(&self) -> Vec<WatchlistEntry> {
        self.holdings.borrow().watchlist().entries().to_vec()
    }

    pub fn len(&self) -> usize {
        self.holdings.borrow().watchlist().len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.borrow().watchlist().is_empty()
    }
}
