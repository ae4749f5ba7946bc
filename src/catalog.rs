//! In-memory stock catalog.
//!
//! The catalog is the SDK's only data source. It ships with three sample
//! NSE-listed penny stocks and can be swapped for any other set of records
//! through [`PennyStockSdkBuilder::catalog`](crate::PennyStockSdkBuilder::catalog).

use std::collections::HashSet;

use crate::error::{PennyStockError, Result};
use crate::models::{Liquidity, Recommendation, StockRecord};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    stocks: Vec<StockRecord>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl Catalog {
    /// Build a catalog from arbitrary records.
    ///
    /// Fails with [`PennyStockError::InvalidArgument`] if a symbol is blank,
    /// not already uppercase, or appears more than once.
    pub fn new(stocks: Vec<StockRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for stock in &stocks {
            if stock.symbol.trim().is_empty() {
                return Err(PennyStockError::InvalidArgument(format!(
                    "Stock '{}' has an empty symbol",
                    stock.name
                )));
            }
            if stock.symbol != stock.symbol.trim().to_uppercase() {
                return Err(PennyStockError::InvalidArgument(format!(
                    "Symbol '{}' must be trimmed uppercase",
                    stock.symbol
                )));
            }
            if !seen.insert(stock.symbol.as_str()) {
                return Err(PennyStockError::InvalidArgument(format!(
                    "Duplicate symbol '{}'",
                    stock.symbol
                )));
            }
        }
        Ok(Self { stocks })
    }

    /// The built-in sample data set.
    pub fn sample() -> Self {
        Self {
            stocks: sample_stocks(),
        }
    }

    /// Look up a stock by ticker.
    ///
    /// Input is trimmed and uppercased before an exact match, so `" radhika "`
    /// finds `RADHIKA`. Returns [`PennyStockError::InvalidArgument`] for blank
    /// input and [`PennyStockError::NotFound`] for an unknown symbol.
    pub fn get(&self, symbol: &str) -> Result<&StockRecord> {
        let wanted = normalize_symbol(symbol)?;
        self.stocks
            .iter()
            .find(|s| s.symbol == wanted)
            .ok_or_else(|| {
                PennyStockError::NotFound(format!(
                    "Stock '{}' not found in our database",
                    wanted
                ))
            })
    }

    /// Search-as-you-type suggestions.
    ///
    /// Matches records whose symbol or name contains the query
    /// (case-insensitive), in catalog order. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&StockRecord> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.stocks
            .iter()
            .filter(|s| {
                s.symbol.to_lowercase().contains(&q) || s.name.to_lowercase().contains(&q)
            })
            .collect()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.stocks.iter().map(|s| s.symbol.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StockRecord> {
        self.stocks.iter()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StockRecord;
    type IntoIter = std::slice::Iter<'a, StockRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Trim and uppercase user input, rejecting blanks.
pub fn normalize_symbol(symbol: &str) -> Result<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(PennyStockError::InvalidArgument(
            "Please enter a stock symbol".to_string(),
        ));
    }
    Ok(trimmed.to_uppercase())
}

fn sample_stocks() -> Vec<StockRecord> {
    vec![
        StockRecord {
            symbol: "RAJOO".to_string(),
            name: "Rajoo Engineers Ltd".to_string(),
            current_price: 82.81,
            market_cap: 1619.21,
            exchange: "NSE".to_string(),
            volume: 45_000,
            pe: 33.97,
            pb: 2.1,
            roe: 32.62,
            debt: 0.0,
            sentiment: 0.6,
            optionable: false,
            liquidity: Liquidity::Low,
            recommendation: Recommendation::Watchlist,
        },
        StockRecord {
            symbol: "CELLECOR".to_string(),
            name: "Cellecor Gadgets Ltd".to_string(),
            current_price: 31.60,
            market_cap: 687.86,
            exchange: "NSE".to_string(),
            volume: 89_000,
            pe: 22.26,
            pb: 1.8,
            roe: 24.21,
            debt: 0.77,
            sentiment: 0.4,
            optionable: false,
            liquidity: Liquidity::Medium,
            recommendation: Recommendation::LongTerm,
        },
        StockRecord {
            symbol: "RADHIKA".to_string(),
            name: "Radhika Jeweltec Ltd".to_string(),
            current_price: 90.25,
            market_cap: 1093.14,
            exchange: "NSE".to_string(),
            volume: 23_000,
            pe: 17.45,
            pb: 1.2,
            roe: 25.78,
            debt: 0.13,
            sentiment: 0.7,
            optionable: false,
            liquidity: Liquidity::Low,
            recommendation: Recommendation::Buy,
        },
    ]
}
