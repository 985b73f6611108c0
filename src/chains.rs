//! Chain metadata resolution.

use crate::{
    constants::{OMNI_MAINNET, OMNI_OMEGA},
    types::{ChainMetadata, Token},
};
use alloy::primitives::ChainId;
use alloy_chains::Chain;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::BTreeMap, fmt::Debug, sync::Arc};

/// Resolves [`ChainMetadata`] by chain ID.
pub trait MetadataResolver: Debug + Send + Sync {
    /// Returns the metadata of `chain_id`, if known.
    fn by_id(&self, chain_id: ChainId) -> Option<ChainMetadata>;
}

impl<T: MetadataResolver + ?Sized> MetadataResolver for Arc<T> {
    fn by_id(&self, chain_id: ChainId) -> Option<ChainMetadata> {
        (**self).by_id(chain_id)
    }
}

/// An in-memory [`MetadataResolver`].
///
/// Serialized as a list of [`ChainMetadata`] ordered by chain ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry(BTreeMap<ChainId, ChainMetadata>);

impl ChainRegistry {
    /// Adds or replaces the metadata of a chain.
    pub fn insert(&mut self, metadata: ChainMetadata) {
        self.0.insert(metadata.chain_id, metadata);
    }

    /// Returns the metadata of `chain_id`.
    pub fn get(&self, chain_id: ChainId) -> Option<&ChainMetadata> {
        self.0.get(&chain_id)
    }

    /// Returns the number of known chains.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the registry has no chains.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl MetadataResolver for ChainRegistry {
    fn by_id(&self, chain_id: ChainId) -> Option<ChainMetadata> {
        self.get(chain_id).cloned()
    }
}

impl FromIterator<ChainMetadata> for ChainRegistry {
    fn from_iter<I: IntoIterator<Item = ChainMetadata>>(iter: I) -> Self {
        Self(iter.into_iter().map(|metadata| (metadata.chain_id, metadata)).collect())
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        let ethereum = Chain::mainnet().id();

        [
            ChainMetadata::new(ethereum, "ethereum", Token::ETH),
            ChainMetadata::new(Chain::optimism_mainnet().id(), "optimism", Token::ETH)
                .with_posts_to(ethereum),
            ChainMetadata::new(Chain::arbitrum_mainnet().id(), "arbitrum_one", Token::ETH)
                .with_posts_to(ethereum),
            ChainMetadata::new(Chain::base_mainnet().id(), "base", Token::ETH)
                .with_posts_to(ethereum),
            ChainMetadata::new(OMNI_MAINNET, "omni", Token::OMNI),
            ChainMetadata::new(OMNI_OMEGA, "omni_omega", Token::OMNI),
        ]
        .into_iter()
        .collect()
    }
}

impl Serialize for ChainRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.values())
    }
}

impl<'de> Deserialize<'de> for ChainRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<ChainMetadata>::deserialize(deserializer).map(Self::from_iter)
    }
}
