//! Pricing-specific error types.

use crate::types::Token;

/// Errors that can occur while fetching token prices.
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    /// Price unavailable for token.
    #[error("Price unavailable for token: {0}")]
    Unavailable(Token),

    /// Token not supported by the price feed.
    #[error("Unsupported token: {0}")]
    UnsupportedToken(Token),

    /// The request to the price feed failed.
    #[error("Price feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The price feed returned an error.
    #[error("Price feed error: {0}")]
    Feed(String),
}
