//! Conversion rates between native tokens.

use crate::{error::PriceError, price::PriceOracle, types::Token};

/// Returns the conversion rate `C` from token `from` to token `to`, where
/// `C = price(from) / price(to)`.
///
/// Eg. to convert from ETH to OMNI we need to know how many OMNI one ETH is worth. If the price
/// of OMNI is 10 and the price of ETH is 1000, then `C = 1000 / 10 = 100`.
///
/// Identical tokens convert at exactly `1` without querying the oracle.
pub async fn conversion_rate<O: PriceOracle + ?Sized>(
    oracle: &O,
    from: Token,
    to: Token,
) -> Result<f64, PriceError> {
    if from == to {
        return Ok(1.0);
    }

    let prices = oracle.price(from, to).await?;

    let to_price = prices.price(to).ok_or(PriceError::Unavailable(to))?;
    let from_price = prices.price(from).ok_or(PriceError::Unavailable(from))?;

    Ok(from_price / to_price)
}
