//! Fee parameter error types.
use alloy::primitives::ChainId;
use thiserror::Error;

mod gas;
pub use gas::GasPriceError;

mod pricing;
pub use pricing::PriceError;

/// The error type returned when computing fee parameters.
///
/// Price and gas price failures are absorbed by fallbacks, so only missing chain metadata is
/// fatal.
#[derive(Debug, Error)]
pub enum FeeParamsError {
    /// No metadata is known for the chain.
    #[error("metadata not found for chain {0}")]
    MetadataNotFound(ChainId),
}
