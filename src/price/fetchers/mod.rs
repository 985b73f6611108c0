mod coingecko;
pub use coingecko::CoinGecko;

mod constant;
pub use constant::ConstantPrices;
