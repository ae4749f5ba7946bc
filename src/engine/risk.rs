use crate::config::{HIGH_DEBT, REGULATED_EXCHANGES, VOLUME_THRESHOLD};
use crate::models::{Liquidity, RiskFlag, RiskKind, StockRecord};

// Independent checks; every one that holds adds a flag, in this order.
const CHECKS: [(RiskKind, fn(&StockRecord) -> bool); 5] = [
    (RiskKind::LowLiquidity, illiquid),
    (RiskKind::LowVolume, thinly_traded),
    (RiskKind::HighDebt, heavily_indebted),
    (RiskKind::NoHedging, unhedgeable),
    (RiskKind::Unregulated, off_exchange),
];

fn illiquid(stock: &StockRecord) -> bool {
    stock.liquidity == Liquidity::Low
}

fn thinly_traded(stock: &StockRecord) -> bool {
    stock.volume < VOLUME_THRESHOLD
}

fn heavily_indebted(stock: &StockRecord) -> bool {
    stock.debt > HIGH_DEBT
}

fn unhedgeable(stock: &StockRecord) -> bool {
    !stock.optionable
}

fn off_exchange(stock: &StockRecord) -> bool {
    !REGULATED_EXCHANGES.contains(&stock.exchange.as_str())
}

/// Collect the risk flags raised by `stock`.
///
/// Never empty: when no check fires, a single low-level
/// [`RiskKind::LowRiskProfile`] flag is returned.
pub fn derive_risk_flags(stock: &StockRecord) -> Vec<RiskFlag> {
    let mut flags: Vec<RiskFlag> = CHECKS
        .iter()
        .filter(|(_, check)| check(stock))
        .map(|(kind, _)| RiskFlag::from(*kind))
        .collect();

    if flags.is_empty() {
        flags.push(RiskFlag::from(RiskKind::LowRiskProfile));
    }
    flags
}
