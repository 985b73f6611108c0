//! Request-scoped price caching.
//!
//! Fee parameters for several destination chains often need the same token pair, eg. every
//! rollup that uses ETH as its native token. [`CachedPriceOracle`] makes sure a pair is only
//! requested once per computation.

use super::PriceCacheMetrics;
use crate::{
    error::PriceError,
    price::PriceOracle,
    types::{PriceQuote, Token, TokenPair},
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::fmt;
use tracing::trace;

/// A [`PriceOracle`] that memoizes quotes of the wrapped oracle by [`TokenPair`].
///
/// Quotes never expire, so an instance must be scoped to a single computation and dropped
/// afterwards. Failed queries are not cached: while the oracle keeps failing, every destination
/// sharing a token pair queries it again, so a pair costs at most one successful query.
pub struct CachedPriceOracle<'a, O: ?Sized> {
    /// The wrapped oracle.
    inner: &'a O,
    /// Quotes by requested pair.
    quotes: DashMap<TokenPair, PriceQuote>,
    /// Cache metrics.
    metrics: PriceCacheMetrics,
}

impl<'a, O: PriceOracle + ?Sized> CachedPriceOracle<'a, O> {
    /// Wraps `inner` in an empty cache.
    pub fn new(inner: &'a O) -> Self {
        Self { inner, quotes: DashMap::new(), metrics: PriceCacheMetrics::default() }
    }

    /// Returns the number of cached quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether no quote has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl<O: fmt::Debug + ?Sized> fmt::Debug for CachedPriceOracle<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedPriceOracle")
            .field("inner", &self.inner)
            .field("cached", &self.quotes.len())
            .finish()
    }
}

#[async_trait]
impl<'a, O: PriceOracle + ?Sized> PriceOracle for CachedPriceOracle<'a, O> {
    async fn price(&self, a: Token, b: Token) -> Result<PriceQuote, PriceError> {
        let pair = TokenPair::new(a, b);

        let cached = self.quotes.get(&pair).map(|quote| quote.value().clone());
        if let Some(quote) = cached {
            trace!(pair = %pair.identifier(), "Price cache HIT");
            self.metrics.hits.increment(1);
            return Ok(quote);
        }

        self.metrics.misses.increment(1);
        let quote = self.inner.price(a, b).await?;
        trace!(pair = %pair.identifier(), "Caching price quote");
        self.quotes.insert(pair, quote.clone());

        Ok(quote)
    }
}
