//! Async wrapper around [`PennyStockSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`] and paces analyses through the staged
//! progress steps from [`config::analysis_steps`] so a UI can animate them.
//! The pauses carry no data; the result is identical to the sync API.
//!
//! # Example
//!
//! ```no_run
//! use pennystock_sdk::AsyncPennyStockSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncPennyStockSdk::builder().in_memory(true).build().await.unwrap();
//!
//!     let analysis = sdk
//!         .analyze_with_progress("RADHIKA", |step| {
//!             println!("[{}/{}] {}", step.index + 1, step.total, step.label)
//!         })
//!         .await
//!         .unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let added = sdk.run(move |s| s.portfolio().add(&analysis.stock)).await.unwrap();
//! }
//! ```

use std::path::Path;
use std::sync::{Arc, Mutex};

use log::debug;

use crate::catalog::{normalize_symbol, Catalog};
use crate::config;
use crate::error::{PennyStockError, Result};
use crate::models::{Analysis, PortfolioSummary};
use crate::store::KeyValueStore;
use crate::{PennyStockSdk, PennyStockSdkBuilder};

/// One stage of the progress animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisStep {
    /// Zero-based position of this step.
    pub index: usize,
    pub total: usize,
    pub label: &'static str,
}

// ---------------------------------------------------------------------------
// AsyncPennyStockSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPennyStockSdk`] instance.
pub struct AsyncPennyStockSdkBuilder {
    inner: PennyStockSdkBuilder,
    progress_delays: bool,
}

impl Default for AsyncPennyStockSdkBuilder {
    fn default() -> Self {
        Self {
            inner: PennyStockSdkBuilder::default(),
            progress_delays: true,
        }
    }
}

impl AsyncPennyStockSdkBuilder {
    /// Set a custom directory for the file-backed store.
    pub fn store_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.store_dir(path);
        self
    }

    /// Keep collections in memory only.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.inner = self.inner.in_memory(in_memory);
        self
    }

    /// Inject a custom persistence backend.
    pub fn store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.inner = self.inner.store(store);
        self
    }

    /// Replace the built-in sample catalog.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.inner = self.inner.catalog(catalog);
        self
    }

    /// Seed the RNG behind the cosmetic display metrics.
    pub fn seed(mut self, seed: u64) -> Self {
        self.inner = self.inner.seed(seed);
        self
    }

    /// Sleep between progress steps. Defaults to `true`; disable in tests.
    pub fn progress_delays(mut self, enabled: bool) -> Self {
        self.progress_delays = enabled;
        self
    }

    /// Build the async SDK on the blocking thread pool, since opening a
    /// file store touches the filesystem.
    pub async fn build(self) -> Result<AsyncPennyStockSdk> {
        let progress_delays = self.progress_delays;
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let sdk = inner.build()?;
            Ok(AsyncPennyStockSdk {
                inner: Arc::new(Mutex::new(sdk)),
                progress_delays,
            })
        })
        .await
        .map_err(|e| PennyStockError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPennyStockSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`PennyStockSdk`].
///
/// The underlying [`PennyStockSdk`] is protected by a [`Mutex`] since it uses
/// `RefCell` internally. Only one analysis is expected in flight at a time.
pub struct AsyncPennyStockSdk {
    inner: Arc<Mutex<PennyStockSdk>>,
    progress_delays: bool,
}

impl AsyncPennyStockSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncPennyStockSdkBuilder {
        AsyncPennyStockSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PennyStockSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| PennyStockError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| PennyStockError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Analyze `symbol` after walking through the progress steps.
    pub async fn analyze(&self, symbol: &str) -> Result<Analysis> {
        self.analyze_with_progress(symbol, |_| {}).await
    }

    /// Analyze `symbol`, calling `on_step` as each progress step starts.
    ///
    /// Blank input is rejected before any step runs. An unknown ticker fails
    /// with [`PennyStockError::NotFound`] after the steps complete.
    pub async fn analyze_with_progress<F>(&self, symbol: &str, mut on_step: F) -> Result<Analysis>
    where
        F: FnMut(AnalysisStep),
    {
        let symbol = normalize_symbol(symbol)?;
        let steps = config::analysis_steps();
        let total = steps.len();
        for (index, (label, delay)) in steps.into_iter().enumerate() {
            debug!("Analysis of {}: step {}/{} {}", symbol, index + 1, total, label);
            on_step(AnalysisStep {
                index,
                total,
                label,
            });
            if self.progress_delays {
                tokio::time::sleep(delay).await;
            }
        }
        self.run(move |s| s.analyze(&symbol)).await
    }

    /// Portfolio summary, computed on the blocking pool.
    pub async fn summary(&self) -> Result<PortfolioSummary> {
        self.run(|s| Ok(s.portfolio().summary())).await
    }
}
