//! Fee parameter metrics.

use metrics::Counter;
use metrics_derive::Metrics;

/// Metrics for a [`FeeParamsGenerator`](crate::pricing::FeeParamsGenerator).
#[derive(Metrics, Clone)]
#[metrics(scope = "feeparams")]
pub struct FeeParamsMetrics {
    /// Number of destinations priced.
    pub destinations: Counter,
    /// Number of times a fallback conversion rate was used.
    pub rate_fallbacks: Counter,
    /// Number of times the fallback execution gas price was used.
    pub exec_gas_price_fallbacks: Counter,
    /// Number of times the fallback data gas price was used.
    pub data_gas_price_fallbacks: Counter,
}
