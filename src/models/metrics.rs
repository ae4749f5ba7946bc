//! Cosmetic display metrics shown alongside an analysis.
//!
//! None of these values feed back into the confidence score, classification
//! or risk flags. Several are sampled at random for demo realism.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Traffic-light hint attached to each metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Good,
    Neutral,
    Bad,
}

/// A metric value paired with its indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rated<T> {
    pub value: T,
    pub indicator: Indicator,
}

impl<T> Rated<T> {
    pub fn new(value: T, indicator: Indicator) -> Self {
        Self { value, indicator }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsiderActivity {
    Buying,
    Neutral,
}

impl fmt::Display for InsiderActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsiderActivity::Buying => f.write_str("Buying"),
            InsiderActivity::Neutral => f.write_str("Neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationMetrics {
    pub pe: Rated<f64>,
    pub pb: Rated<f64>,
    /// `None` when ROE is zero.
    pub peg: Rated<Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityMetrics {
    pub roe: Rated<f64>,
    pub roa: Rated<f64>,
    pub net_margin: Rated<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvencyMetrics {
    pub debt_to_equity: Rated<f64>,
    pub current_ratio: Rated<f64>,
    /// `None` (shown as N/A) for debt-free companies.
    pub interest_coverage: Rated<Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMetrics {
    pub avg_daily_volume: Rated<u64>,
    pub volatility: Rated<f64>,
    pub momentum: Rated<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeMetrics {
    pub news_sentiment: Rated<u32>,
    pub social_attention: Rated<u32>,
    pub insider_activity: Rated<InsiderActivity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub valuation: ValuationMetrics,
    pub profitability: ProfitabilityMetrics,
    pub solvency: SolvencyMetrics,
    pub market: MarketMetrics,
    pub alternative: AlternativeMetrics,
}
