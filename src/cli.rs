//! # Fee params CLI
use crate::{config::FeeParamsConfig, metrics::build_exporter, pricing::FeeParamsGenerator};
use alloy::primitives::ChainId;
use clap::Parser;
use eyre::{OptionExt, WrapErr};
use std::{path::PathBuf, time::Duration};
use tracing::info;
use url::Url;

/// Computes the fee parameters of destination chains relative to a source chain.
#[derive(Debug, Parser)]
#[command(author, about = "Fee params", long_about = None)]
pub struct Args {
    /// The configuration file.
    ///
    /// If missing, a default one will be used and stored under the given path.
    #[arg(
        long,
        value_name = "CONFIG",
        env = "FEEPARAMS_CONFIG",
        default_value = "feeparams.yaml"
    )]
    pub config: PathBuf,
    /// The chain the fee parameters are relative to.
    #[arg(long = "source", value_name = "CHAIN_ID")]
    pub source: ChainId,
    /// A destination chain. The output keeps the order of the destinations.
    #[arg(long = "dest", value_name = "CHAIN_ID", required = true)]
    pub destinations: Vec<ChainId>,
    /// The RPC endpoint of a chain, in the format "chain_id:url".
    ///
    /// Overrides the endpoint of the chain in the config.
    #[arg(long = "endpoint", value_name = "RPC_ENDPOINT", value_parser = parse_chain_url)]
    pub endpoints: Vec<(ChainId, Url)>,
    /// The CoinGecko demo API key.
    #[arg(long = "coingecko-api-key", value_name = "KEY", env = "COINGECKO_API_KEY")]
    pub coingecko_api_key: Option<String>,
    /// Upper bound for the whole computation.
    #[arg(long, value_name = "SECONDS", value_parser = parse_duration_secs, default_value = "30")]
    pub timeout: Duration,
    /// Prints the recorded metrics in the Prometheus format to stderr when done.
    #[arg(long, default_value_t = false)]
    pub metrics: bool,
}

impl Args {
    /// Computes the fee parameters and prints them as JSON to stdout.
    pub async fn run(self) -> eyre::Result<()> {
        let metrics = self.metrics.then(build_exporter).transpose()?;

        let config = if !self.config.exists() {
            let config = self.merge_config(FeeParamsConfig::default());
            config.save_to_file(&self.config)?;
            info!(path = %self.config.display(), "Stored default config");
            config
        } else {
            self.merge_config(FeeParamsConfig::load_from_file(&self.config)?)
        };

        let oracle = config.price_oracle()?;
        let gas_prices = config.gas_backends();
        let generator = FeeParamsGenerator::new(&config.chains, &config.tiers, &config.fallback);

        let params = tokio::time::timeout(
            self.timeout,
            generator.fee_params(self.source, &self.destinations, &gas_prices, &*oracle),
        )
        .await
        .wrap_err("fee params computation timed out")??;

        println!("{}", serde_json::to_string_pretty(&params)?);

        if let Some(handle) = metrics {
            eprintln!("{}", handle.render());
        }

        Ok(())
    }

    /// Merges [`Args`] values into an existing [`FeeParamsConfig`] instance.
    pub fn merge_config(&self, config: FeeParamsConfig) -> FeeParamsConfig {
        self.endpoints
            .iter()
            .fold(config, |config, (chain_id, url)| config.with_endpoint(*chain_id, url.clone()))
            .with_coingecko_api_key(self.coingecko_api_key.clone())
    }
}

/// Parses a string representing seconds to a [`Duration`].
fn parse_duration_secs(arg: &str) -> Result<Duration, std::num::ParseIntError> {
    let seconds = arg.parse()?;
    Ok(Duration::from_secs(seconds))
}

/// Parses a string representing a pair of chain id and a url in a format of "chain_id:url".
fn parse_chain_url(arg: &str) -> eyre::Result<(ChainId, Url)> {
    let (chain_id, url) = arg.split_once(':').ok_or_eyre("expected chain_id:url argument")?;

    Ok((chain_id.parse()?, url.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;
    use std::collections::BTreeMap;

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from([
            "feeparams",
            "--source",
            "166",
            "--dest",
            "1",
            "--dest",
            "10",
            "--endpoint",
            "1:https://eth.example.com",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert_eq!(args.source, 166);
        assert_eq!(args.destinations, vec![1, 10]);
        assert_eq!(args.endpoints, vec![(1, "https://eth.example.com".parse().unwrap())]);
        assert_eq!(args.timeout, Duration::from_secs(5));
        assert!(!args.metrics);
    }

    #[test]
    fn destination_required() {
        assert!(Args::try_parse_from(["feeparams", "--source", "166"]).is_err());
    }

    #[test]
    fn invalid_endpoint() {
        assert!(parse_chain_url("https://eth.example.com").is_err());
        assert!(parse_chain_url("eth:https://eth.example.com").is_err());
    }

    #[test]
    fn merge_overrides_endpoints() {
        let args = Args::try_parse_from([
            "feeparams",
            "--source",
            "1",
            "--dest",
            "1",
            "--endpoint",
            "1:https://eth.example.com",
        ])
        .unwrap();
        let config = FeeParamsConfig::default()
            .with_endpoint(1, "https://old.example.com".parse().unwrap())
            .with_endpoint(10, "https://op.example.com".parse().unwrap());

        let config = args.merge_config(config);

        assert_eq!(config.endpoints[&1].as_str(), "https://eth.example.com/");
        assert_eq!(config.endpoints[&10].as_str(), "https://op.example.com/");
    }

    #[test]
    fn merge_keeps_file_api_key() {
        let mut args =
            Args::try_parse_from(["feeparams", "--source", "1", "--dest", "1"]).unwrap();
        args.coingecko_api_key = None;
        let config =
            FeeParamsConfig::default().with_coingecko_api_key(Some("from-file".to_string()));

        let config = args.merge_config(config);
        assert_eq!(config.pricefeed.coingecko.api_key.as_deref(), Some("from-file"));

        args.coingecko_api_key = Some("from-args".to_string());
        let config = args.merge_config(config);
        assert_eq!(config.pricefeed.coingecko.api_key.as_deref(), Some("from-args"));
    }

    #[tokio::test]
    async fn run_with_constant_prices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feeparams.yaml");
        FeeParamsConfig::default()
            .with_constant_prices(BTreeMap::from([(Token::ETH, 3000.0), (Token::OMNI, 6.0)]))
            .save_to_file(&path)
            .unwrap();

        let args = Args::try_parse_from([
            "feeparams",
            "--config",
            path.to_str().unwrap(),
            "--source",
            "166",
            "--dest",
            "1",
        ])
        .unwrap();

        args.run().await.unwrap();
    }

    #[tokio::test]
    async fn missing_config_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feeparams.yaml");

        let args = Args::try_parse_from([
            "feeparams",
            "--config",
            path.to_str().unwrap(),
            "--source",
            "42",
            "--dest",
            "1",
        ])
        .unwrap();

        // unknown source chain
        assert!(args.run().await.is_err());
        assert_eq!(FeeParamsConfig::load_from_file(&path).unwrap(), FeeParamsConfig::default());
    }
}
