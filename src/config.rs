use std::path::PathBuf;
use std::time::Duration;

/// Store key holding the serialized portfolio.
pub const PORTFOLIO_KEY: &str = "pennystock-portfolio";
/// Store key holding the serialized watchlist.
pub const WATCHLIST_KEY: &str = "pennystock-watchlist";

pub const BASE_CONFIDENCE: i32 = 50;
pub const MIN_CONFIDENCE: i32 = 30;
pub const MAX_CONFIDENCE: i32 = 95;

pub const BULLISH_SENTIMENT: f64 = 0.6;
pub const BEARISH_SENTIMENT: f64 = 0.3;
pub const CHEAP_PE: f64 = 20.0;
pub const LOW_DEBT: f64 = 0.5;
pub const HIGH_DEBT: f64 = 0.7;
pub const STRONG_ROE: f64 = 20.0;

/// Average daily volume separating thin from adequate trading.
pub const VOLUME_THRESHOLD: u64 = 50_000;

/// Exchanges considered regulated; anything else is treated as OTC.
pub const REGULATED_EXCHANGES: [&str; 2] = ["NSE", "BSE"];

/// Progress steps shown while an analysis runs, with the pause after each.
pub fn analysis_steps() -> Vec<(&'static str, Duration)> {
    vec![
        ("Fetching market data", Duration::from_millis(800)),
        ("Computing fundamentals", Duration::from_millis(600)),
        ("Scoring sentiment", Duration::from_millis(700)),
        ("Building recommendation", Duration::from_millis(500)),
    ]
}

pub fn default_store_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("pennystock-sdk")
    } else {
        PathBuf::from(".pennystock-sdk")
    }
}
