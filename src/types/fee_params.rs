use alloy::primitives::ChainId;
use serde::{Deserialize, Serialize};

/// Fee parameters of a single destination chain, as consumed by `FeeOracleV2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeParams {
    /// Destination chain ID.
    pub chain_id: ChainId,
    /// Execution gas price tier of the destination chain, in wei.
    pub exec_gas_price: u64,
    /// Data gas price tier of the chain the destination posts data to, in wei.
    pub data_gas_price: u64,
    /// Destination to source native token rate, over
    /// [`CONVERSION_RATE_DENOM`](crate::constants::CONVERSION_RATE_DENOM).
    pub to_native_rate: u64,
}
