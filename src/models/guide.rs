use serde::Serialize;

use super::analysis::InvestmentType;

// ---------------------------------------------------------------------------
// InvestmentGuide — Educational blurb for each trading style
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestmentGuide {
    pub title: &'static str,
    pub description: &'static str,
    pub requirements: [&'static str; 3],
    pub suitability: &'static str,
}

impl InvestmentType {
    pub fn guide(self) -> InvestmentGuide {
        match self {
            InvestmentType::FuturesAndOptions => InvestmentGuide {
                title: "F&O",
                description: "Futures and Options trading",
                requirements: [
                    "High liquidity",
                    "Exchange listing",
                    "Minimum volume thresholds",
                ],
                suitability: "Very few penny stocks qualify",
            },
            InvestmentType::Intraday => InvestmentGuide {
                title: "Intraday",
                description: "Same-day buy and sell",
                requirements: ["Adequate volume", "Tight spreads", "Volatility"],
                suitability: "Only liquid penny stocks",
            },
            InvestmentType::LongTerm => InvestmentGuide {
                title: "Long-term",
                description: "Buy and hold strategy",
                requirements: [
                    "Strong fundamentals",
                    "Growth potential",
                    "Manageable debt",
                ],
                suitability: "Fundamentally sound small companies",
            },
            InvestmentType::WatchlistOnly => InvestmentGuide {
                title: "Watchlist",
                description: "Monitor for future opportunities",
                requirements: [
                    "Interesting story",
                    "Too risky currently",
                    "Needs more data",
                ],
                suitability: "High-risk but potentially rewarding stocks",
            },
        }
    }
}
