use crate::{
    error::PriceError,
    price::PriceOracle,
    types::{PriceQuote, Token},
};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// A [`PriceOracle`] serving a fixed set of prices.
///
/// Used for offline runs and testing.
#[derive(Debug, Clone, Default)]
pub struct ConstantPrices(BTreeMap<Token, f64>);

impl ConstantPrices {
    /// Creates a new [`ConstantPrices`] oracle.
    pub fn new(prices: BTreeMap<Token, f64>) -> Self {
        Self(prices)
    }
}

impl FromIterator<(Token, f64)> for ConstantPrices {
    fn from_iter<I: IntoIterator<Item = (Token, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[async_trait]
impl PriceOracle for ConstantPrices {
    async fn price(&self, a: Token, b: Token) -> Result<PriceQuote, PriceError> {
        Ok([a, b]
            .into_iter()
            .filter_map(|token| self.0.get(&token).map(|price| (token, *price)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn only_requested_tokens() {
        let oracle = ConstantPrices::from_iter([
            (Token::ETH, 3000.0),
            (Token::OMNI, 7.5),
            (Token::BNB, 600.0),
        ]);

        let quote = oracle.price(Token::ETH, Token::OMNI).await.unwrap();
        assert_eq!(quote.len(), 2);
        assert_eq!(quote.price(Token::ETH), Some(3000.0));
        assert_eq!(quote.price(Token::OMNI), Some(7.5));

        let quote = oracle.price(Token::POL, Token::ETH).await.unwrap();
        assert_eq!(quote.price(Token::POL), None);
        assert_eq!(quote.price(Token::ETH), Some(3000.0));
    }
}
