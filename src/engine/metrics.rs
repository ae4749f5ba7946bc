//! Builds the cosmetic [`DisplayMetrics`] block.
//!
//! Derived ratios are fixed linear transforms of the record's fields; the
//! remaining figures are drawn from `rng` within fixed bounds. Pass a seeded
//! RNG for reproducible output.

use rand::Rng;

use crate::config::VOLUME_THRESHOLD;
use crate::models::{
    AlternativeMetrics, DisplayMetrics, Indicator, InsiderActivity, MarketMetrics,
    ProfitabilityMetrics, Rated, SolvencyMetrics, StockRecord, ValuationMetrics,
};

pub fn display_metrics<R: Rng + ?Sized>(stock: &StockRecord, rng: &mut R) -> DisplayMetrics {
    let valuation = ValuationMetrics {
        pe: Rated::new(stock.pe, good_if(stock.pe < 25.0)),
        pb: Rated::new(stock.pb, good_if(stock.pb < 2.0)),
        peg: Rated::new(peg_ratio(stock), Indicator::Neutral),
    };

    let profitability = ProfitabilityMetrics {
        roe: Rated::new(stock.roe, good_if(stock.roe > 15.0)),
        roa: Rated::new(round_to(stock.roe * 0.7, 1), Indicator::Good),
        net_margin: Rated::new(round_to(stock.roe * 0.3, 1), Indicator::Good),
    };

    let debt_free = stock.debt == 0.0;
    let solvency = SolvencyMetrics {
        debt_to_equity: Rated::new(
            stock.debt,
            if stock.debt < 0.5 {
                Indicator::Good
            } else {
                Indicator::Bad
            },
        ),
        current_ratio: Rated::new(round_to(rng.gen_range(1.2..2.0), 2), Indicator::Good),
        interest_coverage: if debt_free {
            Rated::new(None, Indicator::Good)
        } else {
            Rated::new(Some(round_to(rng.gen_range(15.0..25.0), 1)), Indicator::Neutral)
        },
    };

    let market = MarketMetrics {
        avg_daily_volume: Rated::new(
            stock.volume,
            if stock.volume > VOLUME_THRESHOLD {
                Indicator::Good
            } else {
                Indicator::Bad
            },
        ),
        volatility: Rated::new(round_to(rng.gen_range(25.0..45.0), 1), Indicator::Neutral),
        momentum: Rated::new(round_to(rng.gen_range(-15.0..15.0), 1), Indicator::Neutral),
    };

    let sentiment_indicator = if stock.sentiment > 0.6 {
        Indicator::Good
    } else if stock.sentiment < 0.4 {
        Indicator::Bad
    } else {
        Indicator::Neutral
    };
    let insider = if rng.gen_bool(0.5) {
        InsiderActivity::Buying
    } else {
        InsiderActivity::Neutral
    };
    // The insider hint is an independent draw, not derived from `insider`.
    let insider_indicator = good_if(rng.gen_bool(0.5));
    let alternative = AlternativeMetrics {
        news_sentiment: Rated::new(
            (stock.sentiment * 100.0).round().clamp(0.0, 100.0) as u32,
            sentiment_indicator,
        ),
        social_attention: Rated::new(rng.gen_range(0..100), Indicator::Neutral),
        insider_activity: Rated::new(insider, insider_indicator),
    };

    DisplayMetrics {
        valuation,
        profitability,
        solvency,
        market,
        alternative,
    }
}

/// `pe / (roe * 0.5)` to two places, undefined for zero ROE.
pub fn peg_ratio(stock: &StockRecord) -> Option<f64> {
    if stock.roe == 0.0 {
        return None;
    }
    Some(round_to(stock.pe / (stock.roe * 0.5), 2))
}

fn good_if(cond: bool) -> Indicator {
    if cond {
        Indicator::Good
    } else {
        Indicator::Neutral
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
