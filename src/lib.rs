//! # Fee params
//!
//! Computes the parameters a cross-chain fee oracle needs to charge senders on a source chain for
//! execution on destination chains: the execution gas price of each destination, the gas price
//! of the chain it posts data to, and the conversion rate from the destination native token to
//! the source native token.
//!
//! Prices and gas prices are fetched from external sources. Any failure is replaced by a
//! configured fallback, so fee parameters are always produced for known chains.

pub mod cache;
pub mod chains;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod gas;
pub mod metrics;
pub mod price;
pub mod pricing;
pub mod types;
