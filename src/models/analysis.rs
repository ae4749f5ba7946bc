use std::fmt;

use serde::{Deserialize, Serialize};

use super::metrics::DisplayMetrics;
use super::stock::StockRecord;

// ---------------------------------------------------------------------------
// Confidence — Heuristic recommendation strength, 30..=95
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(pub u8);

impl Confidence {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% Confidence", self.0)
    }
}

// ---------------------------------------------------------------------------
// InvestmentType — Suggested trading style
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentType {
    #[serde(rename = "F&O Eligible")]
    FuturesAndOptions,
    #[serde(rename = "Intraday Possible")]
    Intraday,
    #[serde(rename = "Long-term Investment")]
    LongTerm,
    #[serde(rename = "Watchlist Only")]
    WatchlistOnly,
}

impl InvestmentType {
    pub const ALL: [InvestmentType; 4] = [
        InvestmentType::FuturesAndOptions,
        InvestmentType::Intraday,
        InvestmentType::LongTerm,
        InvestmentType::WatchlistOnly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InvestmentType::FuturesAndOptions => "F&O Eligible",
            InvestmentType::Intraday => "Intraday Possible",
            InvestmentType::LongTerm => "Long-term Investment",
            InvestmentType::WatchlistOnly => "Watchlist Only",
        }
    }

    /// Fixed explanation shown next to the label.
    pub fn reason(self) -> &'static str {
        match self {
            InvestmentType::FuturesAndOptions => {
                "High liquidity and options availability make this suitable for derivatives trading."
            }
            InvestmentType::Intraday => {
                "Adequate volume supports intraday trading with manageable slippage."
            }
            InvestmentType::LongTerm => {
                "Strong fundamentals suggest good long-term growth potential."
            }
            InvestmentType::WatchlistOnly => {
                "Monitor for improved liquidity or fundamental changes before investing."
            }
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of the investment-type rule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub reason: String,
}

impl From<InvestmentType> for Classification {
    fn from(investment_type: InvestmentType) -> Self {
        Self {
            investment_type,
            reason: investment_type.reason().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Risk flags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Capitalized form used in portfolio summaries.
    pub fn title(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which check raised a [`RiskFlag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    LowLiquidity,
    LowVolume,
    HighDebt,
    NoHedging,
    Unregulated,
    LowRiskProfile,
}

impl RiskKind {
    pub fn level(self) -> RiskLevel {
        match self {
            RiskKind::LowLiquidity | RiskKind::HighDebt | RiskKind::Unregulated => RiskLevel::High,
            RiskKind::LowVolume | RiskKind::NoHedging => RiskLevel::Medium,
            RiskKind::LowRiskProfile => RiskLevel::Low,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            RiskKind::LowLiquidity => "Low liquidity may result in execution difficulties",
            RiskKind::LowVolume => "Below average trading volume",
            RiskKind::HighDebt => "High debt levels increase financial risk",
            RiskKind::NoHedging => "No options available for hedging",
            RiskKind::Unregulated => "OTC trading increases regulatory risk",
            RiskKind::LowRiskProfile => "Relatively low risk profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub kind: RiskKind,
    pub level: RiskLevel,
    pub text: String,
}

impl From<RiskKind> for RiskFlag {
    fn from(kind: RiskKind) -> Self {
        Self {
            kind,
            level: kind.level(),
            text: kind.text().to_string(),
        }
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.text)
    }
}

// ---------------------------------------------------------------------------
// Analysis — Everything produced for one looked-up stock
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub stock: StockRecord,
    pub confidence: Confidence,
    pub classification: Classification,
    pub risks: Vec<RiskFlag>,
    pub metrics: DisplayMetrics,
}

impl Analysis {
    /// Highest severity among the raised flags.
    pub fn worst_risk(&self) -> RiskLevel {
        self.risks
            .iter()
            .map(|r| r.level)
            .max()
            .unwrap_or(RiskLevel::Low)
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.stock)?;
        writeln!(
            f,
            "{} | {} ({})",
            self.confidence, self.classification.investment_type, self.stock.recommendation
        )?;
        writeln!(f, "{}", self.classification.reason)?;
        for risk in &self.risks {
            writeln!(f, "  {}", risk)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PortfolioSummary — Headline statistics for the portfolio view
// ---------------------------------------------------------------------------

/// Summary statistics; `risk_level` and `diversification` are `None` for an
/// empty portfolio and render as `"-"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub count: usize,
    pub risk_level: Option<RiskLevel>,
    pub diversification: Option<u8>,
}

impl PortfolioSummary {
    pub fn risk_label(&self) -> &'static str {
        self.risk_level.map(RiskLevel::title).unwrap_or("-")
    }

    pub fn diversification_label(&self) -> String {
        match self.diversification {
            Some(pct) => format!("{}%", pct),
            None => "-".to_string(),
        }
    }
}

impl fmt::Display for PortfolioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "holdings={} risk={} diversification={}",
            self.count,
            self.risk_label(),
            self.diversification_label()
        )
    }
}
