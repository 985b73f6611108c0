//! Gas price sampling and tiering.

mod provider;
pub use provider::{ProviderBackend, ProviderBackends};

mod tier;
pub use tier::{GasPriceTier, GasPriceTiers};

use crate::error::GasPriceError;
use alloy::primitives::ChainId;
use async_trait::async_trait;
use std::fmt::Debug;

/// A handle able to sample the current gas price of a single chain.
#[async_trait]
pub trait GasPriceBackend: Debug + Send + Sync {
    /// Returns the suggested gas price, in wei.
    async fn suggest_gas_price(&self) -> Result<u128, GasPriceError>;
}

/// Resolves [`GasPriceBackend`]s by chain ID.
pub trait GasPriceSource: Debug + Send + Sync {
    /// The backend type.
    type Backend: GasPriceBackend;

    /// Returns the backend of `chain_id`.
    fn backend(&self, chain_id: ChainId) -> Result<&Self::Backend, GasPriceError>;
}
