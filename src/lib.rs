//! Penny stock screening SDK for Rust.
//!
//! Looks up tickers in a small stock catalog, scores them with a fixed
//! heuristic (confidence, investment-type suggestion, risk flags) and keeps a
//! portfolio and watchlist persisted through a pluggable key-value store.
//!
//! # Quick start
//!
//! ```no_run
//! use pennystock_sdk::PennyStockSdk;
//!
//! let sdk = PennyStockSdk::builder().in_memory(true).build().unwrap();
//!
//! // Score a stock
//! let analysis = sdk.analyze("radhika").unwrap();
//! println!("{}", analysis.confidence);
//!
//! // Save it
//! sdk.portfolio().add(&analysis.stock).unwrap();
//! println!("{}", sdk.portfolio().summary());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod holdings;
pub mod models;
pub mod queries;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncPennyStockSdk;
pub use catalog::Catalog;
pub use error::{PennyStockError, Result};
pub use holdings::Holdings;
pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::{Analysis, InvestmentGuide, InvestmentType};

// ---------------------------------------------------------------------------
// PennyStockSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PennyStockSdk`] instance.
///
/// Use [`PennyStockSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PennyStockSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct PennyStockSdkBuilder {
    store_dir: Option<PathBuf>,
    in_memory: bool,
    store: Option<Box<dyn KeyValueStore>>,
    catalog: Option<Catalog>,
    seed: Option<u64>,
}

impl PennyStockSdkBuilder {
    /// Set a custom directory for the file-backed store.
    ///
    /// If not set, the platform data directory is used (e.g.
    /// `~/.local/share/pennystock-sdk` on Linux).
    pub fn store_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.store_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep the portfolio and watchlist in memory only. Defaults to `false`.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Inject a custom persistence backend. Takes precedence over
    /// [`store_dir`](Self::store_dir) and [`in_memory`](Self::in_memory).
    pub fn store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the built-in sample catalog.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Seed the RNG behind the cosmetic display metrics.
    ///
    /// Scores, classifications and risk flags are deterministic regardless.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the SDK, loading both persisted collections from the store.
    pub fn build(self) -> Result<PennyStockSdk> {
        let store: Box<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None if self.in_memory => Box::new(MemoryStore::new()),
            None => Box::new(FileStore::new(self.store_dir)?),
        };
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(PennyStockSdk {
            catalog: self.catalog.unwrap_or_default(),
            holdings: RefCell::new(Holdings::load(store)),
            rng: RefCell::new(rng),
        })
    }
}

// ---------------------------------------------------------------------------
// PennyStockSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Owns the catalog, the [`Holdings`] repository and the metrics RNG, and
/// exposes domain-specific interfaces as lightweight borrowing wrappers.
///
/// Created via [`PennyStockSdk::builder()`].
pub struct PennyStockSdk {
    catalog: Catalog,
    holdings: RefCell<Holdings>,
    rng: RefCell<StdRng>,
}

impl PennyStockSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PennyStockSdkBuilder {
        PennyStockSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the stock lookup and analysis interface.
    pub fn stocks(&self) -> queries::stocks::StockQuery<'_> {
        queries::stocks::StockQuery::new(&self.catalog, &self.rng)
    }

    /// Access the portfolio interface.
    pub fn portfolio(&self) -> queries::portfolio::PortfolioQuery<'_> {
        queries::portfolio::PortfolioQuery::new(&self.holdings)
    }

    /// Access the watchlist interface.
    pub fn watchlist(&self) -> queries::watchlist::WatchlistQuery<'_> {
        queries::watchlist::WatchlistQuery::new(&self.holdings)
    }

    // -- Convenience methods -----------------------------------------------

    /// Look up `symbol` and run the full analysis.
    ///
    /// Shorthand for `sdk.stocks().analyze(symbol)`.
    pub fn analyze(&self, symbol: &str) -> Result<Analysis> {
        self.stocks().analyze(symbol)
    }

    /// Educational blurbs for every investment type, in rule order.
    pub fn investment_guides(&self) -> Vec<InvestmentGuide> {
        InvestmentType::ALL.iter().map(|t| t.guide()).collect()
    }

    /// Return a reference to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consume the SDK and hand back the persistence store.
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.holdings.into_inner().into_store()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PennyStockSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let holdings = self.holdings.borrow();
        write!(
            f,
            "PennyStockSdk(catalog=[{}], portfolio={}, watchlist={})",
            self.catalog.symbols().join(", "),
            holdings.portfolio().len(),
            holdings.watchlist().len()
        )
    }
}
