pub mod analysis;
pub mod guide;
pub mod holding;
pub mod metrics;
pub mod stock;

pub use analysis::*;
pub use guide::*;
pub use holding::*;
pub use metrics::*;
pub use stock::*;
