//! Denomination-keyed coin sets.
//!
//! A [`CoinSet`] is always in canonical form: entries sorted by denomination and
//! no zero amounts. Every operation returns a new canonical set, so equality is
//! structural and serialization is deterministic across replicas.

use std::collections::BTreeMap;

use core::fmt;

use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::coin::{Amount, amount_text};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoinSet<A> {
    entries: BTreeMap<String, A>,
}

impl<A> Default for CoinSet<A> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<A: Amount> CoinSet<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the set holds no (non-zero) entries.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn amount_of(&self, denom: &str) -> A {
        self.entries.get(denom).copied().unwrap_or_default()
    }

    /// Entries in canonical (denomination) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, A)> + '_ {
        self.entries.iter().map(|(denom, amount)| (denom.as_str(), *amount))
    }

    pub fn denoms(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Per-denomination sum.
    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (denom, amount) in other.iter() {
            out.add_amount(denom.to_string(), amount);
        }
        out
    }

    /// Per-denomination difference, floored at zero.
    ///
    /// Denominations that reach zero are dropped, so the result stays canonical.
    pub fn saturating_sub(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (denom, amount) in other.iter() {
            if let Some(current) = out.entries.get_mut(denom) {
                *current = current.saturating_sub(amount);
                if current.is_zero() {
                    out.entries.remove(denom);
                }
            }
        }
        out
    }

    pub(crate) fn add_amount(&mut self, denom: String, amount: A) {
        if amount.is_zero() {
            return;
        }
        let entry = self.entries.entry(denom).or_default();
        *entry = entry.saturating_add(amount);
    }
}

impl<A: Amount> fmt::Display for CoinSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (denom, amount)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{amount}{denom}")?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(bound = "A: Amount")]
struct EntryRef<'a, A: Amount> {
    denom: &'a str,
    #[serde(with = "amount_text")]
    amount: A,
}

#[derive(Deserialize)]
#[serde(bound = "A: Amount")]
struct EntryOwned<A: Amount> {
    denom: String,
    #[serde(with = "amount_text")]
    amount: A,
}

impl<A: Amount> Serialize for CoinSet<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (denom, amount) in self.iter() {
            seq.serialize_element(&EntryRef { denom, amount })?;
        }
        seq.end()
    }
}

impl<'de, A: Amount> Deserialize<'de> for CoinSet<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<EntryOwned<A>>::deserialize(deserializer)?;
        let mut set = Self::new();
        for entry in entries {
            crate::coin::validate_denom(&entry.denom).map_err(serde::de::Error::custom)?;
            set.add_amount(entry.denom, entry.amount);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Coin, Coins};

    fn coins(entries: &[(&str, u128)]) -> Coins {
        entries.iter().map(|(d, a)| Coin::new(*d, *a)).collect()
    }

    #[test]
    fn collecting_merges_and_drops_zero() {
        let set = coins(&[("uusd", 5), ("ukrw", 0), ("uusd", 7), ("uluna", 1)]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.amount_of("uusd"), 12);
        assert_eq!(set.amount_of("ukrw"), 0);
        assert_eq!(set.to_string(), "1uluna,12uusd");
    }

    #[test]
    fn subtraction_floors_at_zero_and_drops_entries() {
        let a = coins(&[("ukrw", 10), ("uusd", 3)]);
        let b = coins(&[("ukrw", 4), ("uusd", 9), ("usdr", 1)]);
        let diff = a.saturating_sub(&b);
        assert_eq!(diff, coins(&[("ukrw", 6)]));
        assert!(coins(&[("ukrw", 4)]).saturating_sub(&coins(&[("ukrw", 4)])).is_zero());
    }

    #[test]
    fn serializes_in_canonical_order() {
        let set = coins(&[("uusd", 2), ("ukrw", 1)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"[{"denom":"ukrw","amount":"1"},{"denom":"uusd","amount":"2"}]"#
        );
        let back: Coins = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    fn arb_coins() -> impl Strategy<Value = Coins> {
        prop::collection::vec(
            (prop::sample::select(vec!["ukrw", "uusd", "usdr", "uluna"]), 0u128..1_000_000_000),
            0..8,
        )
        .prop_map(|entries| entries.into_iter().map(|(d, a)| Coin::new(d, a)).collect())
    }

    proptest! {
        /// Property: adding then subtracting the same set restores the original.
        #[test]
        fn add_then_sub_is_identity(a in arb_coins(), b in arb_coins()) {
            prop_assert_eq!(a.add(&b).saturating_sub(&b), a);
        }

        /// Property: canonical sets never contain zero entries.
        #[test]
        fn no_zero_entries(a in arb_coins(), b in arb_coins()) {
            for (_, amount) in a.saturating_sub(&b).iter() {
                prop_assert!(amount > 0);
            }
        }
    }
}
