//! Stability tax computation (pure function).
//!
//! # Rules
//!
//! - `due = floor(amount * rate)`, truncation only
//! - `due = min(due, cap(denom))`
//! - the exempt native denomination is never taxed
//! - denominations whose due is zero are omitted

use nametrack_core::{Coin, Coins, Dec};
use nametrack_registry::TreasuryKeeper;

/// Capped tax owed on `principal`.
pub fn compute_tax(
    rate: Dec,
    cap_of: impl Fn(&str) -> u128,
    exempt_denom: &str,
    principal: &Coins,
) -> Coins {
    if rate.is_zero() {
        return Coins::new();
    }

    principal
        .iter()
        .filter(|(denom, _)| *denom != exempt_denom)
        .filter_map(|(denom, amount)| {
            let due = rate.mul_int_truncate(amount).min(cap_of(denom));
            (due != 0).then(|| Coin::new(denom, due))
        })
        .collect()
}

/// [`compute_tax`] with the treasury's current rate and caps.
pub fn treasury_tax<T: TreasuryKeeper + ?Sized>(
    treasury: &T,
    exempt_denom: &str,
    principal: &Coins,
) -> Coins {
    compute_tax(
        treasury.tax_rate(),
        |denom| treasury.tax_cap(denom),
        exempt_denom,
        principal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXEMPT: &str = "uluna";
    const CAP: u128 = 1_000_000;

    fn rate() -> Dec {
        Dec::with_prec(675, 5).unwrap()
    }

    fn coins(entries: &[(&str, u128)]) -> Coins {
        entries.iter().map(|(d, a)| Coin::new(*d, *a)).collect()
    }

    #[test]
    fn exempt_ignored_small_dropped_large_capped() {
        // uluna is exempt, ukrw is under the cap, uusd is over it, usdr rounds to zero
        let principal = coins(&[
            (EXEMPT, 12_343_353),
            ("ukrw", 1000),
            ("uusd", 10_000_000_000_000_000),
            ("usdr", 1),
        ]);

        let taxes = compute_tax(rate(), |_| CAP, EXEMPT, &principal);
        assert_eq!(taxes, coins(&[("ukrw", 6), ("uusd", CAP)]));
    }

    #[test]
    fn empty_principal_is_untaxed() {
        assert!(compute_tax(rate(), |_| CAP, EXEMPT, &Coins::new()).is_zero());
    }

    #[test]
    fn cap_is_looked_up_per_denom() {
        let principal = coins(&[("ukrw", 1_000_000), ("uusd", 1_000_000)]);
        let taxes = compute_tax(rate(), |d| if d == "ukrw" { 10 } else { CAP }, EXEMPT, &principal);
        assert_eq!(taxes, coins(&[("ukrw", 10), ("uusd", 6750)]));
    }

    fn arb_principal() -> impl Strategy<Value = Coins> {
        prop::collection::vec(
            (
                prop::sample::select(vec![EXEMPT, "ukrw", "uusd", "usdr", "umnt"]),
                0u128..10_000_000_000_000_000_000,
            ),
            0..6,
        )
        .prop_map(|entries| entries.into_iter().map(|(d, a)| Coin::new(d, a)).collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a zero rate never produces tax, whatever the caps.
        #[test]
        fn zero_rate_is_empty(principal in arb_principal(), cap in any::<u128>()) {
            prop_assert!(compute_tax(Dec::ZERO, |_| cap, EXEMPT, &principal).is_zero());
        }

        /// Property: tax never exceeds the cap nor the truncated product, and skips the exempt denom.
        #[test]
        fn tax_is_bounded(principal in arb_principal(), raw_rate in 0u128..=1_000_000_000_000_000_000, cap in 0u128..5_000_000) {
            let rate = Dec::from_raw(raw_rate);
            let taxes = compute_tax(rate, |_| cap, EXEMPT, &principal);

            prop_assert_eq!(taxes.amount_of(EXEMPT), 0);
            for (denom, due) in taxes.iter() {
                prop_assert!(due > 0);
                prop_assert!(due <= cap);
                prop_assert!(due <= rate.mul_int_truncate(principal.amount_of(denom)));
            }
        }
    }
}
