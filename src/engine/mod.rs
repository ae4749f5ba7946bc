//! Recommendation engine.
//!
//! Pure functions over a [`StockRecord`]: a clamped confidence score, an
//! ordered-rule investment-type classification and a list of risk flags.
//! Only the cosmetic display metrics consume randomness, and they take the
//! RNG as an argument.

pub mod classify;
pub mod confidence;
pub mod metrics;
pub mod risk;

pub use classify::{classify_investment_type, matching_rules, Rule, RULES};
pub use confidence::compute_confidence;
pub use metrics::{display_metrics, peg_ratio};
pub use risk::derive_risk_flags;

use log::debug;
use rand::Rng;

use crate::models::{Analysis, StockRecord};

/// Run every heuristic over `stock` and bundle the results.
pub fn analyze<R: Rng + ?Sized>(stock: &StockRecord, rng: &mut R) -> Analysis {
    let confidence = compute_confidence(stock);
    let classification = classify_investment_type(stock);
    let risks = derive_risk_flags(stock);
    let metrics = display_metrics(stock, rng);

    debug!(
        "Analyzed {}: confidence={} type={} risks={}",
        stock.symbol,
        confidence.value(),
        classification.investment_type,
        risks.len()
    );

    Analysis {
        stock: stock.clone(),
        confidence,
        classification,
        risks,
        metrics,
    }
}
