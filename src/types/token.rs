use serde::Serialize;
use std::{collections::HashMap, fmt::Display, str::FromStr};

/// Chain and contract agnostic tokens.
///
/// Used to identify the native token of a chain when pricing fees across chains.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
#[non_exhaustive]
pub enum Token {
    /// Ether
    ETH,
    /// Omni
    OMNI,
    /// BNB
    BNB,
    /// POL
    POL,
    /// USDC
    USDC,
    /// USDT
    USDT,
}

impl Token {
    /// All known tokens.
    pub const ALL: [Self; 6] =
        [Self::ETH, Self::OMNI, Self::BNB, Self::POL, Self::USDC, Self::USDT];

    /// Returns the str identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::ETH => "ETH",
            Token::OMNI => "OMNI",
            Token::BNB => "BNB",
            Token::POL => "POL",
            Token::USDC => "USDC",
            Token::USDT => "USDT",
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Token`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token: {0}")]
pub struct UnknownToken(String);

impl FromStr for Token {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}

impl<'de> serde::Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).and_then(|s| s.parse().map_err(serde::de::Error::custom))
    }
}

/// An ordered token pair.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct TokenPair {
    /// Numerator.
    pub from: Token,
    /// Denominator.
    pub to: Token,
}

impl TokenPair {
    /// Creates a new [`TokenPair`].
    pub fn new(from: Token, to: Token) -> Self {
        Self { from, to }
    }

    /// Returns the pair identifier.
    pub fn identifier(&self) -> String {
        format!("{}/{}", self.from, self.to)
    }
}

/// Token prices returned by a single price query.
///
/// Absent or non-positive prices are treated as unknown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceQuote(HashMap<Token, f64>);

impl PriceQuote {
    /// Returns the price of `token`, if it is known and positive.
    pub fn price(&self, token: Token) -> Option<f64> {
        self.0.get(&token).copied().filter(|price| *price > 0.0)
    }

    /// Returns the number of tokens in the quote.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the quote contains no prices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Token, f64)> for PriceQuote {
    fn from_iter<I: IntoIterator<Item = (Token, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("eth".parse::<Token>().unwrap(), Token::ETH);
        assert_eq!("Omni".parse::<Token>().unwrap(), Token::OMNI);
        assert!("doge".parse::<Token>().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Token::OMNI).unwrap();
        assert_eq!(json, "\"OMNI\"");
        assert_eq!(serde_json::from_str::<Token>(&json).unwrap(), Token::OMNI);
        assert_eq!(serde_json::from_str::<Token>("\"usdc\"").unwrap(), Token::USDC);
    }

    #[test]
    fn quote_ignores_non_positive_prices() {
        let quote =
            PriceQuote::from_iter([(Token::ETH, 3000.0), (Token::OMNI, 0.0), (Token::BNB, -1.0)]);

        assert_eq!(quote.price(Token::ETH), Some(3000.0));
        assert_eq!(quote.price(Token::OMNI), None);
        assert_eq!(quote.price(Token::BNB), None);
        assert_eq!(quote.price(Token::POL), None);
        assert_eq!(quote.len(), 3);
    }

    #[test]
    fn pair_identifier() {
        assert_eq!(TokenPair::new(Token::ETH, Token::OMNI).identifier(), "ETH/OMNI");
    }
}
