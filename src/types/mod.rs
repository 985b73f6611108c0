//! Fee parameter types.

mod chain;
pub use chain::ChainMetadata;

mod fee_params;
pub use fee_params::FeeParams;

mod token;
pub use token::{PriceQuote, Token, TokenPair, UnknownToken};
