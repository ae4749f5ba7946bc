use crate::config::{
    BASE_CONFIDENCE, BEARISH_SENTIMENT, BULLISH_SENTIMENT, CHEAP_PE, LOW_DEBT, MAX_CONFIDENCE,
    MIN_CONFIDENCE, STRONG_ROE,
};
use crate::models::{Confidence, Liquidity, StockRecord};

/// Score how strongly the fundamentals back a recommendation.
///
/// Starts at 50 and adds fixed bonuses (or the bearish-sentiment penalty)
/// for each condition that holds, then clamps to `30..=95`.
pub fn compute_confidence(stock: &StockRecord) -> Confidence {
    let mut score = BASE_CONFIDENCE;

    score += match stock.liquidity {
        Liquidity::High => 20,
        Liquidity::Medium => 10,
        Liquidity::Low => 0,
    };

    if stock.sentiment > BULLISH_SENTIMENT {
        score += 15;
    } else if stock.sentiment < BEARISH_SENTIMENT {
        score -= 15;
    }

    if stock.pe < CHEAP_PE {
        score += 10;
    }
    if stock.debt < LOW_DEBT {
        score += 10;
    }
    if stock.roe > STRONG_ROE {
        score += 10;
    }

    Confidence(score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8)
}
