//! Single coins, denominations and the shared amount abstraction.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coin_set::CoinSet;
use crate::error::{TrackingError, TrackingResult};

/// Minimum/maximum denomination length (inclusive).
const DENOM_MIN_LEN: usize = 3;
const DENOM_MAX_LEN: usize = 16;

/// Non-negative quantity held in a coin set.
///
/// Implemented by `u128` (integer coins) and [`crate::Dec`] (decimal coins).
/// Arithmetic saturates so accounting can never panic inside a hook.
pub trait Amount: Copy + Ord + Default + fmt::Display + fmt::Debug {
    fn is_zero(&self) -> bool;
    fn saturating_add(self, other: Self) -> Self;
    fn saturating_sub(self, other: Self) -> Self;
    fn parse_amount(text: &str) -> TrackingResult<Self>;
}

impl Amount for u128 {
    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn saturating_add(self, other: Self) -> Self {
        u128::saturating_add(self, other)
    }

    fn saturating_sub(self, other: Self) -> Self {
        u128::saturating_sub(self, other)
    }

    fn parse_amount(text: &str) -> TrackingResult<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TrackingError::invalid_coin(format!("amount `{text}` is not an integer")));
        }
        text.parse::<u128>()
            .map_err(|e| TrackingError::invalid_coin(format!("amount `{text}`: {e}")))
    }
}

/// Validate a denomination against `[a-z][a-z0-9]{2,15}`.
pub fn validate_denom(denom: &str) -> TrackingResult<()> {
    let bytes = denom.as_bytes();
    if bytes.len() < DENOM_MIN_LEN || bytes.len() > DENOM_MAX_LEN {
        return Err(TrackingError::invalid_denom(format!(
            "`{denom}` must be {DENOM_MIN_LEN}..={DENOM_MAX_LEN} characters"
        )));
    }
    if !bytes[0].is_ascii_lowercase() {
        return Err(TrackingError::invalid_denom(format!(
            "`{denom}` must start with a lowercase letter"
        )));
    }
    if !bytes[1..]
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    {
        return Err(TrackingError::invalid_denom(format!(
            "`{denom}` may only contain lowercase letters and digits"
        )));
    }
    Ok(())
}

/// Split `<amount><denom>` text at the first character that cannot belong to an amount.
pub(crate) fn split_coin_text(text: &str) -> TrackingResult<(&str, &str)> {
    let split = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or_else(|| TrackingError::invalid_coin(format!("`{text}` has no denom")))?;
    let (amount, denom) = text.split_at(split);
    if amount.is_empty() {
        return Err(TrackingError::invalid_coin(format!("`{text}` has no amount")));
    }
    validate_denom(denom).map_err(|e| TrackingError::invalid_coin(format!("`{text}`: {e}")))?;
    Ok((amount, denom))
}

/// Serde adapter writing amounts as decimal strings.
pub(crate) mod amount_text {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Amount;

    pub fn serialize<A: Amount, S: Serializer>(amount: &A, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, A: Amount, D: Deserializer<'de>>(deserializer: D) -> Result<A, D::Error> {
        let text = String::deserialize(deserializer)?;
        A::parse_amount(&text).map_err(serde::de::Error::custom)
    }
}

/// Integer coin, text form `<integer><denom>` (e.g. `1000ukrw`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "amount_text")]
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, denom) = split_coin_text(s)?;
        Ok(Self::new(denom, u128::parse_amount(amount)?))
    }
}

/// Integer coin set.
pub type Coins = CoinSet<u128>;

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        core::iter::once(coin).collect()
    }
}

impl FromIterator<Coin> for Coins {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        let mut coins = Coins::new();
        for coin in iter {
            coins.add_amount(coin.denom, coin.amount);
        }
        coins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_coin_text() {
        let coin: Coin = "1000000000ukrw".parse().unwrap();
        assert_eq!(coin, Coin::new("ukrw", 1_000_000_000));
        assert_eq!(coin.to_string(), "1000000000ukrw");
    }

    #[test]
    fn rejects_malformed_coin_text() {
        for text in [
            "invalid coin",
            "",
            "ukrw",
            "1000",
            "10.5ukrw",
            "+10ukrw",
            "10 ukrw",
            "10UKRW",
            "10uk",
            "10averyveryverylongdenom",
            "340282366920938463463374607431768211456ukrw",
        ] {
            let err = text.parse::<Coin>().unwrap_err();
            assert!(
                matches!(err, TrackingError::InvalidCoin(_)),
                "{text:?} produced {err:?}"
            );
        }
    }

    #[test]
    fn denom_grammar() {
        assert!(validate_denom("uluna").is_ok());
        assert!(validate_denom("u2x").is_ok());
        assert!(validate_denom("1abc").is_err());
        assert!(validate_denom("ab").is_err());
        assert!(validate_denom("ab-c").is_err());
    }

    #[test]
    fn coin_serializes_amount_as_string() {
        let json = serde_json::to_value(Coin::new("uusd", 42)).unwrap();
        assert_eq!(json, serde_json::json!({ "denom": "uusd", "amount": "42" }));
    }
}
