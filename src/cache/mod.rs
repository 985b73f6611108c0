//! Request-scoped caching.
//!
//! Caches in this module live for a single fee parameter computation and are never shared
//! between computations, so values do not expire.

mod metrics;
pub use metrics::PriceCacheMetrics;

mod price;
pub use price::CachedPriceOracle;
