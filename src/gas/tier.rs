use crate::constants::GWEI;
use serde::{Deserialize, Serialize};

/// Quantizes a raw gas price into a discrete tier.
///
/// Implementations must be monotonic: a higher raw price never yields a lower tier.
pub trait GasPriceTier: Send + Sync {
    /// Returns the tier of a raw gas price in wei.
    fn tier(&self, gas_price: u64) -> u64;
}

impl<F> GasPriceTier for F
where
    F: Fn(u64) -> u64 + Send + Sync,
{
    fn tier(&self, gas_price: u64) -> u64 {
        self(gas_price)
    }
}

/// Gas price tiers, as an ascending list of boundaries in wei.
///
/// A raw price maps to the smallest boundary that is greater or equal to it. Prices above the
/// largest boundary are kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u64>", into = "Vec<u64>")]
pub struct GasPriceTiers(Vec<u64>);

impl GasPriceTiers {
    /// Creates tiers from unordered boundaries.
    pub fn new(mut boundaries: Vec<u64>) -> Self {
        boundaries.sort_unstable();
        boundaries.dedup();
        Self(boundaries)
    }

    /// Returns the tier boundaries in ascending order.
    pub fn boundaries(&self) -> &[u64] {
        &self.0
    }
}

impl Default for GasPriceTiers {
    fn default() -> Self {
        Self::new(vec![
            GWEI / 1000,
            GWEI / 100,
            GWEI / 20,
            GWEI / 10,
            GWEI / 2,
            GWEI,
            2 * GWEI,
            5 * GWEI,
            10 * GWEI,
            20 * GWEI,
            50 * GWEI,
            100 * GWEI,
            200 * GWEI,
            500 * GWEI,
            1000 * GWEI,
        ])
    }
}

impl From<Vec<u64>> for GasPriceTiers {
    fn from(boundaries: Vec<u64>) -> Self {
        Self::new(boundaries)
    }
}

impl From<GasPriceTiers> for Vec<u64> {
    fn from(tiers: GasPriceTiers) -> Self {
        tiers.0
    }
}

impl GasPriceTier for GasPriceTiers {
    fn tier(&self, gas_price: u64) -> u64 {
        let idx = self.0.partition_point(|boundary| *boundary < gas_price);
        self.0.get(idx).copied().unwrap_or(gas_price)
    }
}
