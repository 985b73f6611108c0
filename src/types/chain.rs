use super::Token;
use alloy::primitives::ChainId;
use serde::{Deserialize, Serialize};

/// Static metadata of a chain relevant to fee pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMetadata {
    /// The chain ID.
    pub chain_id: ChainId,
    /// Human readable chain name.
    pub name: String,
    /// Token used to pay for gas on this chain.
    pub native_token: Token,
    /// The chain this chain posts data or settles to.
    ///
    /// For L1s this is the chain itself, for rollups it is the L1 they post batches to.
    pub posts_to: ChainId,
}

impl ChainMetadata {
    /// Creates metadata for a chain that posts data to itself.
    pub fn new(chain_id: ChainId, name: impl Into<String>, native_token: Token) -> Self {
        Self { chain_id, name: name.into(), native_token, posts_to: chain_id }
    }

    /// Sets the chain this chain posts data to.
    pub fn with_posts_to(mut self, posts_to: ChainId) -> Self {
        self.posts_to = posts_to;
        self
    }

    /// Whether data for this chain is posted to another chain.
    pub fn is_rollup(&self) -> bool {
        self.posts_to != self.chain_id
    }
}
