use crate::{
    error::PriceError,
    types::{PriceQuote, Token},
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

/// A source of token prices.
///
/// Prices only need to be comparable within a single quote, so any common quote currency works.
#[async_trait]
pub trait PriceOracle: Debug + Send + Sync {
    /// Returns the prices of `a` and `b` in a single round trip.
    ///
    /// Tokens the oracle has no price for are left out of the quote.
    async fn price(&self, a: Token, b: Token) -> Result<PriceQuote, PriceError>;
}

#[async_trait]
impl<T: PriceOracle + ?Sized> PriceOracle for Arc<T> {
    async fn price(&self, a: Token, b: Token) -> Result<PriceQuote, PriceError> {
        (**self).price(a, b).await
    }
}

#[async_trait]
impl<T: PriceOracle + ?Sized> PriceOracle for Box<T> {
    async fn price(&self, a: Token, b: Token) -> Result<PriceQuote, PriceError> {
        (**self).price(a, b).await
    }
}
