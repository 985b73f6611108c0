//! Fee parameter constants.

use alloy::primitives::ChainId;

/// Denominator of the fixed-point conversion rate.
///
/// Matches `CONVERSION_RATE_DENOM` on the `FeeOracleV2` contract, where
/// `amount_a * rate / CONVERSION_RATE_DENOM = amount_b`. Changing it requires a contract upgrade.
pub const CONVERSION_RATE_DENOM: u64 = 1_000_000;

/// One gwei, in wei.
pub const GWEI: u64 = 1_000_000_000;

/// Gas price used when a chain's gas price cannot be sampled.
pub const DEFAULT_GAS_PRICE: u64 = GWEI;

/// Conversion rate used when the destination native token is the utility token and no price
/// is available (1 OMNI = 0.0025 ETH).
pub const DEFAULT_UTILITY_TOKEN_RATE: f64 = 0.0025;

/// Conversion rate used when no price is available and no other peg applies (1 ETH = 400 OMNI).
pub const DEFAULT_CONVERSION_RATE: f64 = 400.0;

/// Omni mainnet chain ID.
pub const OMNI_MAINNET: ChainId = 166;

/// Omni Omega testnet chain ID.
pub const OMNI_OMEGA: ChainId = 164;

/// The default CoinGecko API base URL.
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default timeout for a single price feed request, in seconds.
pub const DEFAULT_PRICE_REQUEST_TIMEOUT_SECS: u64 = 10;
