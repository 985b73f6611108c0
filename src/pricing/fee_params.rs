//! Fee parameters for `FeeOracleV2`.

use crate::{
    cache::CachedPriceOracle,
    chains::MetadataResolver,
    config::FallbackConfig,
    error::FeeParamsError,
    gas::{GasPriceBackend, GasPriceSource, GasPriceTier},
    price::PriceOracle,
    pricing::{FeeParamsMetrics, conversion_rate, rate_to_numerator},
    types::{ChainMetadata, FeeParams},
};
use alloy::primitives::ChainId;
use std::fmt;
use tracing::{debug, instrument, warn};

/// The gas price of a destination that is being sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GasPriceKind {
    /// Gas price of the destination chain itself.
    Execution,
    /// Gas price of the chain the destination posts data to.
    Data,
}

impl GasPriceKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Execution => "exec",
            Self::Data => "data",
        }
    }
}

/// Computes [`FeeParams`] of destination chains relative to a source chain.
///
/// Price and gas price failures never fail the computation. Each one is replaced by the
/// matching value of the [`FallbackConfig`] and reported as a warning, so a complete set of fee
/// parameters is produced as long as all chains are known.
pub struct FeeParamsGenerator<'a, R: ?Sized, T: ?Sized> {
    /// Chain metadata.
    chains: &'a R,
    /// Gas price tiering.
    tiers: &'a T,
    /// Fallback values.
    fallback: &'a FallbackConfig,
    /// Fallback metrics.
    metrics: FeeParamsMetrics,
}

impl<R: fmt::Debug + ?Sized, T: ?Sized> fmt::Debug for FeeParamsGenerator<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeeParamsGenerator")
            .field("chains", &self.chains)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl<'a, R, T> FeeParamsGenerator<'a, R, T>
where
    R: MetadataResolver + ?Sized,
    T: GasPriceTier + ?Sized,
{
    /// Creates a new fee params generator with the given dependencies.
    pub fn new(chains: &'a R, tiers: &'a T, fallback: &'a FallbackConfig) -> Self {
        Self { chains, tiers, fallback, metrics: FeeParamsMetrics::default() }
    }

    /// Returns the fee parameters of every destination chain, in the order given.
    ///
    /// Prices are cached for the duration of the call, so destinations sharing a native token
    /// only query `oracle` once.
    ///
    /// # Errors
    ///
    /// Fails with [`FeeParamsError::MetadataNotFound`] if the source chain or any destination
    /// chain is unknown. No partial result is returned in that case.
    #[instrument(skip(self, gas_prices, oracle))]
    pub async fn fee_params<G, O>(
        &self,
        src_chain_id: ChainId,
        dest_chain_ids: &[ChainId],
        gas_prices: &G,
        oracle: &O,
    ) -> Result<Vec<FeeParams>, FeeParamsError>
    where
        G: GasPriceSource + ?Sized,
        O: PriceOracle + ?Sized,
    {
        // scoped to this call, so prices are never reused across computations
        let oracle = CachedPriceOracle::new(oracle);

        let src = self
            .chains
            .by_id(src_chain_id)
            .ok_or(FeeParamsError::MetadataNotFound(src_chain_id))?;

        let mut params = Vec::with_capacity(dest_chain_ids.len());
        for &dest_chain_id in dest_chain_ids {
            let dest = self
                .chains
                .by_id(dest_chain_id)
                .ok_or(FeeParamsError::MetadataNotFound(dest_chain_id))?;

            params.push(self.dest_fee_params(&src, &dest, gas_prices, &oracle).await);
        }

        Ok(params)
    }

    /// Returns the fee parameters of `dest` relative to `src`.
    pub async fn dest_fee_params<G, O>(
        &self,
        src: &ChainMetadata,
        dest: &ChainMetadata,
        gas_prices: &G,
        oracle: &O,
    ) -> FeeParams
    where
        G: GasPriceSource + ?Sized,
        O: PriceOracle + ?Sized,
    {
        self.metrics.destinations.increment(1);

        // Conversion rate from the destination token to the source token. Eg. if the source
        // chain is Omni and the destination is Ethereum, this is how many OMNI one ETH is worth.
        let to_native_rate = conversion_rate(oracle, dest.native_token, src.native_token)
            .await
            .unwrap_or_else(|err| {
                let rate = self.fallback.conversion_rate(src.native_token, dest.native_token);
                self.metrics.rate_fallbacks.increment(1);
                warn!(
                    %err,
                    src_chain = %src.name,
                    dest_chain = %dest.name,
                    to_native_rate = rate,
                    "Failed fetching conversion rate, using default"
                );
                rate
            });

        let exec_gas_price =
            self.gas_price(gas_prices, dest, dest.chain_id, GasPriceKind::Execution).await;
        let data_gas_price =
            self.gas_price(gas_prices, dest, dest.posts_to, GasPriceKind::Data).await;

        let params = FeeParams {
            chain_id: dest.chain_id,
            exec_gas_price: self.tiers.tier(exec_gas_price),
            data_gas_price: self.tiers.tier(data_gas_price),
            to_native_rate: rate_to_numerator(to_native_rate),
        };

        debug!(
            dest_chain = %dest.name,
            exec_gas_price,
            data_gas_price,
            to_native_rate,
            ?params,
            "Computed fee params"
        );

        params
    }

    /// Samples the gas price of `chain_id`, defaulting to the fallback gas price on any error.
    ///
    /// Prices above [`u64::MAX`] saturate.
    async fn gas_price<G>(
        &self,
        gas_prices: &G,
        dest: &ChainMetadata,
        chain_id: ChainId,
        kind: GasPriceKind,
    ) -> u64
    where
        G: GasPriceSource + ?Sized,
    {
        let gas_price = match gas_prices.backend(chain_id) {
            Ok(backend) => backend.suggest_gas_price().await,
            Err(err) => Err(err),
        };

        match gas_price {
            Ok(gas_price) => u64::try_from(gas_price).unwrap_or(u64::MAX),
            Err(err) => {
                match kind {
                    GasPriceKind::Execution => self.metrics.exec_gas_price_fallbacks.increment(1),
                    GasPriceKind::Data => self.metrics.data_gas_price_fallbacks.increment(1),
                }
                warn!(
                    %err,
                    dest_chain = %dest.name,
                    chain_id,
                    kind = kind.as_str(),
                    gas_price = self.fallback.default_gas_price,
                    "Failed fetching gas price, using default"
                );
                self.fallback.default_gas_price
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chains::ChainRegistry,
        constants::GWEI,
        error::GasPriceError,
        gas::GasPriceTiers,
        price::ConstantPrices,
        types::Token,
    };
    use alloy::primitives::map::HashMap;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Fixed(u128);

    #[async_trait]
    impl GasPriceBackend for Fixed {
        async fn suggest_gas_price(&self) -> Result<u128, GasPriceError> {
            Ok(self.0)
        }
    }

    #[derive(Debug, Default)]
    struct FixedGasPrices(HashMap<ChainId, Fixed>);

    impl GasPriceSource for FixedGasPrices {
        type Backend = Fixed;

        fn backend(&self, chain_id: ChainId) -> Result<&Fixed, GasPriceError> {
            self.0.get(&chain_id).ok_or(GasPriceError::BackendUnavailable(chain_id))
        }
    }

    fn identity(gas_price: u64) -> u64 {
        gas_price
    }

    fn chains() -> ChainRegistry {
        [
            ChainMetadata::new(1, "ethereum", Token::ETH),
            ChainMetadata::new(10, "optimism", Token::ETH).with_posts_to(1),
            ChainMetadata::new(166, "omni", Token::OMNI),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn data_gas_price_from_settlement_chain() {
        let chains = chains();
        let fallback = FallbackConfig::default();
        let generator = FeeParamsGenerator::new(&chains, &identity, &fallback);
        let gas_prices = FixedGasPrices(HashMap::from_iter([
            (1, Fixed(30 * GWEI as u128)),
            (10, Fixed(GWEI as u128 / 1000)),
        ]));
        let oracle = ConstantPrices::from_iter([(Token::ETH, 3000.0), (Token::OMNI, 6.0)]);

        let params = generator
            .dest_fee_params(
                chains.get(166).unwrap(),
                chains.get(10).unwrap(),
                &gas_prices,
                &oracle,
            )
            .await;

        assert_eq!(
            params,
            FeeParams {
                chain_id: 10,
                exec_gas_price: GWEI / 1000,
                data_gas_price: 30 * GWEI,
                to_native_rate: 500_000_000,
            }
        );
    }

    #[tokio::test]
    async fn gas_price_saturates() {
        let chains = chains();
        let fallback = FallbackConfig::default();
        let generator = FeeParamsGenerator::new(&chains, &identity, &fallback);
        let gas_prices = FixedGasPrices(HashMap::from_iter([(1, Fixed(u128::MAX))]));
        let ethereum = chains.get(1).unwrap();

        let params = generator
            .dest_fee_params(ethereum, ethereum, &gas_prices, &ConstantPrices::default())
            .await;

        assert_eq!(params.exec_gas_price, u64::MAX);
        assert_eq!(params.data_gas_price, u64::MAX);
        assert_eq!(params.to_native_rate, 1_000_000);
    }

    #[tokio::test]
    async fn fallbacks_are_tiered() {
        let chains = chains();
        let fallback = FallbackConfig { default_gas_price: GWEI + 1, ..Default::default() };
        let tiers = GasPriceTiers::default();
        let generator = FeeParamsGenerator::new(&chains, &tiers, &fallback);

        let params = generator
            .dest_fee_params(
                chains.get(166).unwrap(),
                chains.get(1).unwrap(),
                &FixedGasPrices::default(),
                &ConstantPrices::default(),
            )
            .await;

        assert_eq!(params.exec_gas_price, 2 * GWEI);
        assert_eq!(params.data_gas_price, 2 * GWEI);
        assert_eq!(params.to_native_rate, 400_000_000);
    }

    #[tokio::test]
    async fn utility_token_destination() {
        let chains = chains();
        let fallback = FallbackConfig::default();
        let generator = FeeParamsGenerator::new(&chains, &identity, &fallback);

        let params = generator
            .dest_fee_params(
                chains.get(1).unwrap(),
                chains.get(166).unwrap(),
                &FixedGasPrices::default(),
                &ConstantPrices::default(),
            )
            .await;

        assert_eq!(params.to_native_rate, 2_500);
        assert_eq!(params.exec_gas_price, GWEI);
    }

    #[tokio::test]
    async fn unknown_source() {
        let chains = chains();
        let fallback = FallbackConfig::default();
        let generator = FeeParamsGenerator::new(&chains, &identity, &fallback);

        let err = generator
            .fee_params(42, &[1], &FixedGasPrices::default(), &ConstantPrices::default())
            .await
            .unwrap_err();

        assert!(matches!(err, FeeParamsError::MetadataNotFound(42)));
    }
}
