//! Ordered decision list for the investment-type suggestion.
//!
//! Rules are checked top to bottom and the first match wins, so a stock
//! that is both derivatives-ready and rated `buy` is reported as F&O.

use crate::config::VOLUME_THRESHOLD;
use crate::models::{Classification, InvestmentType, Liquidity, Recommendation, StockRecord};

/// One entry of the decision list.
#[derive(Clone, Copy)]
pub struct Rule {
    pub outcome: InvestmentType,
    pub matches: fn(&StockRecord) -> bool,
}

/// The decision list, in evaluation order. The last rule always matches.
pub const RULES: [Rule; 4] = [
    Rule {
        outcome: InvestmentType::FuturesAndOptions,
        matches: derivatives_ready,
    },
    Rule {
        outcome: InvestmentType::Intraday,
        matches: intraday_tradeable,
    },
    Rule {
        outcome: InvestmentType::LongTerm,
        matches: rated_buy,
    },
    Rule {
        outcome: InvestmentType::WatchlistOnly,
        matches: always,
    },
];

fn derivatives_ready(stock: &StockRecord) -> bool {
    stock.optionable && stock.liquidity == Liquidity::High
}

fn intraday_tradeable(stock: &StockRecord) -> bool {
    stock.liquidity == Liquidity::Medium && stock.volume > VOLUME_THRESHOLD
}

fn rated_buy(stock: &StockRecord) -> bool {
    stock.recommendation == Recommendation::Buy
}

fn always(_: &StockRecord) -> bool {
    true
}

/// Return the outcome of the first rule that matches `stock`.
pub fn classify_investment_type(stock: &StockRecord) -> Classification {
    RULES
        .iter()
        .find(|rule| (rule.matches)(stock))
        .map(|rule| rule.outcome)
        .unwrap_or(InvestmentType::WatchlistOnly)
        .into()
}

/// Every outcome whose rule matches, in list order.
///
/// Useful to see which later rules were shadowed by an earlier match.
pub fn matching_rules(stock: &StockRecord) -> Vec<InvestmentType> {
    RULES
        .iter()
        .filter(|rule| (rule.matches)(stock))
        .map(|rule| rule.outcome)
        .collect()
}
