use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::format_inr;

// ---------------------------------------------------------------------------
// Liquidity — Coarse trading-ease tier
// ---------------------------------------------------------------------------

/// Coarse proxy for how easily a stock can be traded.
///
/// Variants are ordered from least to most liquid so tiers can be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Liquidity {
    Low,
    Medium,
    High,
}

impl Liquidity {
    /// Weight used when averaging a portfolio's risk level (low=1, medium=2, high=3).
    pub fn risk_weight(self) -> u32 {
        match self {
            Liquidity::Low => 1,
            Liquidity::Medium => 2,
            Liquidity::High => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendation — Precomputed label carried by each record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    Watchlist,
    LongTerm,
    Buy,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Watchlist => "watchlist",
            Recommendation::LongTerm => "long-term",
            Recommendation::Buy => "buy",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StockRecord — Immutable input to the recommendation engine
// ---------------------------------------------------------------------------

/// A single catalog entry with the fundamentals the engine scores.
///
/// Prices and market cap are in rupees (market cap in crores), `roe` is a
/// percentage and `debt` is the debt/equity ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub exchange: String,
    pub volume: u64,
    pub pe: f64,
    pub pb: f64,
    pub roe: f64,
    pub debt: f64,
    pub sentiment: f64,
    pub optionable: bool,
    pub liquidity: Liquidity,
    pub recommendation: Recommendation,
}

impl fmt::Display for StockRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} | {})",
            self.symbol,
            self.name,
            format_inr(self.current_price),
            self.exchange
        )
    }
}
