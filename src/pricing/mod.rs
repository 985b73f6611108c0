//! Fee parameter computation.

mod conversion;
pub use conversion::conversion_rate;

mod fee_params;
pub use fee_params::FeeParamsGenerator;

mod metrics;
pub use metrics::FeeParamsMetrics;

mod rate;
pub use rate::rate_to_numerator;

pub use crate::constants::CONVERSION_RATE_DENOM;
