use super::{GasPriceBackend, GasPriceSource};
use crate::error::GasPriceError;
use alloy::{
    primitives::{ChainId, map::HashMap},
    providers::{DynProvider, Provider, ProviderBuilder},
};
use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

/// A [`GasPriceBackend`] sampling `eth_gasPrice` from a provider.
#[derive(Debug, Clone)]
pub struct ProviderBackend {
    /// The chain ID.
    chain_id: ChainId,
    /// Provider for the chain.
    provider: DynProvider,
}

impl ProviderBackend {
    /// Creates a new [`ProviderBackend`].
    pub fn new(chain_id: ChainId, provider: DynProvider) -> Self {
        Self { chain_id, provider }
    }
}

#[async_trait]
impl GasPriceBackend for ProviderBackend {
    #[instrument(skip(self), fields(chain_id = self.chain_id))]
    async fn suggest_gas_price(&self) -> Result<u128, GasPriceError> {
        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .map_err(|source| GasPriceError::QueryFailed { chain_id: self.chain_id, source })?;

        debug!(gas_price, "Sampled gas price");

        Ok(gas_price)
    }
}

/// A collection of [`ProviderBackend`]s for different chains.
#[derive(Debug, Clone, Default)]
pub struct ProviderBackends {
    /// The backends for each chain.
    backends: HashMap<ChainId, ProviderBackend>,
}

impl ProviderBackends {
    /// Connects an HTTP provider for every endpoint.
    pub fn from_endpoints<'a>(
        endpoints: impl IntoIterator<Item = (&'a ChainId, &'a Url)>,
    ) -> Self {
        let mut backends = Self::default();
        for (chain_id, url) in endpoints {
            backends.insert(*chain_id, ProviderBuilder::new().connect_http(url.clone()).erased());
        }
        backends
    }

    /// Adds or replaces the provider of a chain.
    pub fn insert(&mut self, chain_id: ChainId, provider: DynProvider) {
        self.backends.insert(chain_id, ProviderBackend::new(chain_id, provider));
    }

    /// Get an iterator over the supported chain IDs.
    pub fn chain_ids_iter(&self) -> impl Iterator<Item = &ChainId> {
        self.backends.keys()
    }
}

impl GasPriceSource for ProviderBackends {
    type Backend = ProviderBackend;

    fn backend(&self, chain_id: ChainId) -> Result<&ProviderBackend, GasPriceError> {
        self.backends.get(&chain_id).ok_or(GasPriceError::BackendUnavailable(chain_id))
    }
}
