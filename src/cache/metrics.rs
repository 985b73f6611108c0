//! Cache metrics.

use metrics::Counter;
use metrics_derive::Metrics;

/// Metrics for a [`CachedPriceOracle`](crate::cache::CachedPriceOracle).
#[derive(Metrics, Clone)]
#[metrics(scope = "feeparams.price_cache")]
pub struct PriceCacheMetrics {
    /// Number of quotes served from the cache.
    pub hits: Counter,
    /// Number of quotes fetched from the underlying oracle.
    pub misses: Counter,
}
