//! Gas price error types.

use alloy::{primitives::ChainId, transports::TransportError};

/// Errors that can occur while sampling gas prices.
#[derive(Debug, thiserror::Error)]
pub enum GasPriceError {
    /// No backend is configured for the chain.
    #[error("No gas price backend for chain {0}")]
    BackendUnavailable(ChainId),

    /// The backend failed to return a gas price.
    #[error("Gas price query failed on chain {chain_id}: {source}")]
    QueryFailed {
        /// The chain that was queried.
        chain_id: ChainId,
        /// The underlying transport error.
        #[source]
        source: TransportError,
    },
}
