//! Query modules for the penny stock SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`PennyStockSdk`](crate::PennyStockSdk)'s catalog or
//! [`Holdings`](crate::holdings::Holdings) and exposes methods returning typed
//! models.

pub mod portfolio;
pub mod stocks;
pub mod watchlist;

pub use portfolio::PortfolioQuery;
pub use stocks::StockQuery;
pub use watchlist::WatchlistQuery;
