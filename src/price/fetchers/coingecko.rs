use crate::{
    config::CoinGeckoConfig,
    error::PriceError,
    price::PriceOracle,
    types::{PriceQuote, Token},
};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::{
    collections::{BTreeMap, HashMap},
    time::Duration,
};
use tracing::{instrument, trace};

/// The currency all prices are quoted in.
const QUOTE_CURRENCY: &str = "usd";

/// CoinGecko `simple/price` response, keyed by coin ID and then by currency.
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

/// CoinGecko price oracle.
///
/// Prices are quoted in USD and fetched on demand, one request per quote.
#[derive(Debug, Clone)]
pub struct CoinGecko {
    /// HTTP client.
    client: Client,
    /// `simple/price` endpoint.
    url: Url,
    /// Optional demo API key.
    api_key: Option<String>,
    /// CoinGecko coin IDs of supported tokens.
    coin_ids: BTreeMap<Token, String>,
}

impl CoinGecko {
    /// Creates a new [`CoinGecko`] oracle from the given configuration.
    pub fn new(config: &CoinGeckoConfig) -> Result<Self, PriceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let mut url = config.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| PriceError::Feed(format!("invalid api url: {}", config.api_url)))?
            .pop_if_empty()
            .extend(["simple", "price"]);

        Ok(Self {
            client,
            url,
            api_key: config.api_key.clone(),
            coin_ids: config.coin_ids.clone(),
        })
    }

    /// Returns the CoinGecko coin ID of `token`.
    fn coin_id(&self, token: Token) -> Result<&str, PriceError> {
        self.coin_ids.get(&token).map(String::as_str).ok_or(PriceError::UnsupportedToken(token))
    }

    /// Builds a [`PriceQuote`] for `tokens` from a `simple/price` response.
    ///
    /// Tokens missing from the response are left out of the quote.
    fn quote_from_response(&self, tokens: &[Token], response: &SimplePriceResponse) -> PriceQuote {
        tokens
            .iter()
            .filter_map(|token| {
                let price = response.get(self.coin_ids.get(token)?)?.get(QUOTE_CURRENCY)?;
                Some((*token, *price))
            })
            .collect()
    }
}

#[async_trait]
impl PriceOracle for CoinGecko {
    #[instrument(skip(self))]
    async fn price(&self, a: Token, b: Token) -> Result<PriceQuote, PriceError> {
        let tokens = if a == b { vec![a] } else { vec![a, b] };
        let ids = tokens
            .iter()
            .map(|token| self.coin_id(*token))
            .collect::<Result<Vec<_>, _>>()?
            .join(",");

        let mut query = vec![("ids", ids), ("vs_currencies", QUOTE_CURRENCY.to_string())];
        if let Some(api_key) = &self.api_key {
            query.push(("x_cg_demo_api_key", api_key.clone()));
        }

        let response: SimplePriceResponse = self
            .client
            .get(self.url.clone())
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        trace!(?response, "CoinGecko response.");

        Ok(self.quote_from_response(&tokens, &response))
    }
}
