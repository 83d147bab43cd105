//! Fixed-point decimals and decimal coins.
//!
//! No floats: a [`Dec`] is an unsigned integer scaled by 10^18, so every
//! replica computes bit-identical results.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coin::{Amount, amount_text, split_coin_text};
use crate::coin_set::CoinSet;
use crate::error::{TrackingError, TrackingResult};

/// Number of fractional digits carried by [`Dec`].
pub const DEC_PRECISION: u32 = 18;

const SCALE: u128 = 1_000_000_000_000_000_000;

/// Non-negative fixed-point decimal with 18 fractional digits.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(u128);

impl Dec {
    pub const ZERO: Dec = Dec(0);
    pub const ONE: Dec = Dec(SCALE);

    /// Wrap an already-scaled value (`raw / 10^18`).
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u128 {
        self.0
    }

    pub fn from_int(value: u128) -> Self {
        Self(value.saturating_mul(SCALE))
    }

    /// `value * 10^-prec`, e.g. `with_prec(675, 5)` is `0.00675`.
    pub fn with_prec(value: u128, prec: u32) -> TrackingResult<Self> {
        if prec > DEC_PRECISION {
            return Err(TrackingError::invalid_decimal(format!(
                "precision {prec} exceeds {DEC_PRECISION}"
            )));
        }
        value
            .checked_mul(10u128.pow(DEC_PRECISION - prec))
            .map(Self)
            .ok_or_else(|| TrackingError::invalid_decimal(format!("{value}e-{prec} overflows")))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Integer part, fractional digits discarded.
    pub fn truncate_int(self) -> u128 {
        self.0 / SCALE
    }

    /// `floor(amount * self)`, exact for every input and saturating at `u128::MAX`.
    pub fn mul_int_truncate(self, amount: u128) -> u128 {
        let (int_part, frac_part) = (self.0 / SCALE, self.0 % SCALE);
        let (whole, rem) = (amount / SCALE, amount % SCALE);

        // amount * frac_part / SCALE, split so no intermediate product overflows
        let frac_product = whole
            .saturating_mul(frac_part)
            .saturating_add(rem * frac_part / SCALE);

        amount.saturating_mul(int_part).saturating_add(frac_product)
    }
}

impl Amount for Dec {
    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    fn parse_amount(text: &str) -> TrackingResult<Self> {
        text.parse()
    }
}

impl FromStr for Dec {
    type Err = TrackingError;

    /// Grammar: `[0-9]+(\.[0-9]{1,18})?`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int_text, frac_text) = match s.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (s, None),
        };

        let all_digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_text) {
            return Err(TrackingError::invalid_decimal(format!("`{s}`: bad integer part")));
        }

        let int_part: u128 = int_text
            .parse()
            .map_err(|e| TrackingError::invalid_decimal(format!("`{s}`: {e}")))?;

        let frac_raw = match frac_text {
            None => 0,
            Some(f) if all_digits(f) && f.len() <= DEC_PRECISION as usize => {
                let padded = format!("{f:0<width$}", width = DEC_PRECISION as usize);
                padded
                    .parse::<u128>()
                    .map_err(|e| TrackingError::invalid_decimal(format!("`{s}`: {e}")))?
            }
            Some(_) => {
                return Err(TrackingError::invalid_decimal(format!(
                    "`{s}`: fractional part must be 1..={DEC_PRECISION} digits"
                )));
            }
        };

        int_part
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(frac_raw))
            .map(Self)
            .ok_or_else(|| TrackingError::invalid_decimal(format!("`{s}` overflows")))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / SCALE,
            self.0 % SCALE,
            width = DEC_PRECISION as usize
        )
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Decimal coin, text form `<decimal><denom>` (e.g. `1000.000000000000000000ukrw`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    #[serde(with = "amount_text")]
    pub amount: Dec,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Dec) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn from_int(denom: impl Into<String>, amount: u128) -> Self {
        Self::new(denom, Dec::from_int(amount))
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for DecCoin {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, denom) = split_coin_text(s)?;
        let amount = amount
            .parse::<Dec>()
            .map_err(|e| TrackingError::invalid_coin(format!("`{s}`: {e}")))?;
        Ok(Self::new(denom, amount))
    }
}

/// Decimal coin set.
pub type DecCoins = CoinSet<Dec>;

impl From<DecCoin> for DecCoins {
    fn from(coin: DecCoin) -> Self {
        core::iter::once(coin).collect()
    }
}

impl FromIterator<DecCoin> for DecCoins {
    fn from_iter<I: IntoIterator<Item = DecCoin>>(iter: I) -> Self {
        let mut coins = DecCoins::new();
        for coin in iter {
            coins.add_amount(coin.denom, coin.amount);
        }
        coins
    }
}
