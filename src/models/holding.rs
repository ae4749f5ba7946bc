use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::stock::StockRecord;

/// An entry stored in one of the persisted collections.
///
/// Entries are keyed by the symbol of the wrapped [`StockRecord`] and are
/// built once, at insertion time, from the record being saved.
pub trait HoldingEntry: Clone + Serialize + DeserializeOwned {
    /// Build a fresh entry for `stock`, stamped with `added_at`.
    fn from_stock(stock: &StockRecord, added_at: DateTime<Utc>) -> Self;

    fn stock(&self) -> &StockRecord;

    fn date_added(&self) -> DateTime<Utc>;

    fn symbol(&self) -> &str {
        &self.stock().symbol
    }
}

// ---------------------------------------------------------------------------
// PortfolioEntry — A stock the user holds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    #[serde(flatten)]
    pub stock: StockRecord,
    pub date_added: DateTime<Utc>,
    pub quantity: u32,
    pub avg_price: f64,
}

impl HoldingEntry for PortfolioEntry {
    /// New holdings start with no quantity and the current price as average cost.
    fn from_stock(stock: &StockRecord, added_at: DateTime<Utc>) -> Self {
        Self {
            stock: stock.clone(),
            date_added: added_at,
            quantity: 0,
            avg_price: stock.current_price,
        }
    }

    fn stock(&self) -> &StockRecord {
        &self.stock
    }

    fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}

// ---------------------------------------------------------------------------
// WatchlistEntry — A stock the user is monitoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    #[serde(flatten)]
    pub stock: StockRecord,
    pub date_added: DateTime<Utc>,
}

impl HoldingEntry for WatchlistEntry {
    fn from_stock(stock: &StockRecord, added_at: DateTime<Utc>) -> Self {
        Self {
            stock: stock.clone(),
            date_added: added_at,
        }
    }

    fn stock(&self) -> &StockRecord {
        &self.stock
    }

    fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}
