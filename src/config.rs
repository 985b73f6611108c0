//! Fee parameter configuration.
use crate::{
    chains::ChainRegistry,
    constants::{
        COINGECKO_API_URL, DEFAULT_CONVERSION_RATE, DEFAULT_GAS_PRICE,
        DEFAULT_PRICE_REQUEST_TIMEOUT_SECS, DEFAULT_UTILITY_TOKEN_RATE,
    },
    error::PriceError,
    gas::{GasPriceTiers, ProviderBackends},
    price::{CoinGecko, ConstantPrices, PriceOracle},
    types::{ChainMetadata, Token},
};
use alloy::primitives::ChainId;
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use url::Url;

/// Fee parameter configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeParamsConfig {
    /// Values used when prices or gas prices are unavailable.
    #[serde(default)]
    pub fallback: FallbackConfig,
    /// Known chains.
    #[serde(default)]
    pub chains: ChainRegistry,
    /// RPC endpoints used to sample gas prices, by chain ID.
    #[serde(default)]
    pub endpoints: BTreeMap<ChainId, Url>,
    /// Gas price tier boundaries, in wei.
    #[serde(default)]
    pub tiers: GasPriceTiers,
    /// Price feed config.
    #[serde(default)]
    pub pricefeed: PriceFeedConfig,
}

impl FeeParamsConfig {
    /// Sets the fallback configuration.
    pub fn with_fallback(mut self, fallback: FallbackConfig) -> Self {
        self.fallback = fallback;
        self
    }

    /// Adds or replaces the metadata of a chain.
    pub fn with_chain(mut self, metadata: ChainMetadata) -> Self {
        self.chains.insert(metadata);
        self
    }

    /// Sets the RPC endpoint of a chain.
    pub fn with_endpoint(mut self, chain_id: ChainId, url: Url) -> Self {
        self.endpoints.insert(chain_id, url);
        self
    }

    /// Sets the gas price tiers.
    pub fn with_tiers(mut self, tiers: GasPriceTiers) -> Self {
        self.tiers = tiers;
        self
    }

    /// Sets the CoinGecko API key, keeping the current one if `api_key` is `None`.
    pub fn with_coingecko_api_key(mut self, api_key: Option<String>) -> Self {
        self.pricefeed.coingecko.api_key = api_key.or(self.pricefeed.coingecko.api_key);
        self
    }

    /// Sets constant prices, replacing the live price feed.
    pub fn with_constant_prices(mut self, prices: BTreeMap<Token, f64>) -> Self {
        self.pricefeed.constant = Some(prices);
        self
    }

    /// Builds the configured price oracle.
    ///
    /// Constant prices take precedence over CoinGecko.
    pub fn price_oracle(&self) -> Result<Box<dyn PriceOracle>, PriceError> {
        if let Some(prices) = &self.pricefeed.constant {
            return Ok(Box::new(ConstantPrices::new(prices.clone())));
        }
        Ok(Box::new(CoinGecko::new(&self.pricefeed.coingecko)?))
    }

    /// Connects gas price backends for all configured endpoints.
    pub fn gas_backends(&self) -> ProviderBackends {
        ProviderBackends::from_endpoints(&self.endpoints)
    }

    /// Load from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_reader(&file)
            .wrap_err_with(|| format!("failed to parse config file: {}", path.display()))?;
        config
            .fallback
            .validate()
            .wrap_err_with(|| format!("invalid fallback in config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save to a YAML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> eyre::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Last resort values used when external data is unavailable.
///
/// These are documented pegs, not computed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Gas price used when a gas price cannot be sampled, in wei.
    pub default_gas_price: u64,
    /// The cross-chain utility token.
    pub utility_token: Token,
    /// Conversion rate used when the destination native token is the utility token.
    pub utility_token_rate: f64,
    /// Conversion rate used in all other cases.
    pub default_rate: f64,
}

impl FallbackConfig {
    /// Checks that all fallback values are usable.
    ///
    /// Rates must be finite and positive, and the gas price non-zero, otherwise a fallback would
    /// encode to free fees.
    pub fn validate(&self) -> eyre::Result<()> {
        for (name, rate) in
            [("utility_token_rate", self.utility_token_rate), ("default_rate", self.default_rate)]
        {
            eyre::ensure!(rate.is_finite() && rate > 0.0, "{name} must be positive, got {rate}");
        }
        eyre::ensure!(self.default_gas_price > 0, "default_gas_price must be positive");
        Ok(())
    }

    /// Returns the fallback conversion rate from `dest` to `src`.
    ///
    /// Identical tokens always convert at `1`.
    pub fn conversion_rate(&self, src: Token, dest: Token) -> f64 {
        if src == dest {
            1.0
        } else if dest == self.utility_token {
            self.utility_token_rate
        } else {
            self.default_rate
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            default_gas_price: DEFAULT_GAS_PRICE,
            utility_token: Token::OMNI,
            utility_token_rate: DEFAULT_UTILITY_TOKEN_RATE,
            default_rate: DEFAULT_CONVERSION_RATE,
        }
    }
}

/// Price feed config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceFeedConfig {
    /// Configuration for CoinGecko.
    #[serde(default)]
    pub coingecko: CoinGeckoConfig,
    /// Constant prices to use instead of a live feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<BTreeMap<Token, f64>>,
}

/// Configuration for CoinGecko.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinGeckoConfig {
    /// API base URL.
    pub api_url: Url,
    /// Demo API key.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// A map of tokens to CoinGecko coin IDs.
    pub coin_ids: BTreeMap<Token, String>,
    /// Request timeout, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            api_url: COINGECKO_API_URL.parse().expect("valid url"),
            api_key: None,
            coin_ids: [
                (Token::ETH, "ethereum"),
                (Token::OMNI, "omni-network"),
                (Token::BNB, "binancecoin"),
                (Token::POL, "polygon-ecosystem-token"),
                (Token::USDC, "usd-coin"),
                (Token::USDT, "tether"),
            ]
            .into_iter()
            .map(|(token, id)| (token, id.to_string()))
            .collect(),
            request_timeout_secs: DEFAULT_PRICE_REQUEST_TIMEOUT_SECS,
        }
    }
}
