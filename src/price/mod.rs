//! Price oracle and fetchers.

mod fetchers;
pub use fetchers::*;

mod oracle;
pub use oracle::PriceOracle;
