use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nametrack_core::{Address, Coins, DecCoins, Name};

/// Name registry record: ownership plus the shadow escrow ledger of the name.
///
/// Created by the nameservice module at registration time with empty
/// accounting fields. Only the tracking hooks touch `locked_value`,
/// `tax_contribution` and `swap_fee_contribution`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub name: Name,
    pub owner: Address,
    pub end_time: DateTime<Utc>,
    /// Best-effort mirror of the bound address's balance.
    pub locked_value: Coins,
    /// Stability tax paid by outbound transfers.
    pub tax_contribution: Coins,
    /// Swap fees attributed to this name.
    pub swap_fee_contribution: DecCoins,
}

impl Registry {
    pub fn new(name: Name, owner: Address, end_time: DateTime<Utc>) -> Self {
        Self {
            name,
            owner,
            end_time,
            locked_value: Coins::new(),
            tax_contribution: Coins::new(),
            swap_fee_contribution: DecCoins::new(),
        }
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registry")?;
        writeln!(f, "Name:                {}", self.name)?;
        writeln!(f, "Owner:               {}", self.owner)?;
        writeln!(f, "EndTime:             {}", self.end_time.to_rfc3339())?;
        writeln!(f, "LockedValue:         {}", self.locked_value)?;
        writeln!(f, "TaxContribution:     {}", self.tax_contribution)?;
        writeln!(f, "SwapFeeContribution: {}", self.swap_fee_contribution)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use nametrack_core::{ADDRESS_LEN, Coin, DecCoin};

    use super::*;

    fn sample() -> Registry {
        let mut registry = Registry::new(
            Name::parse("valid.terra").unwrap(),
            Address::new([3; ADDRESS_LEN]),
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        );
        registry.locked_value = Coin::new("ukrw", 500).into();
        registry.swap_fee_contribution = DecCoin::from_int("ukrw", 2).into();
        registry
    }

    #[test]
    fn new_registry_has_empty_ledger() {
        let registry = Registry::new(
            Name::parse("valid.terra").unwrap(),
            Address::new([3; ADDRESS_LEN]),
            Utc.timestamp_opt(0, 0).unwrap(),
        );
        assert!(registry.locked_value.is_zero());
        assert!(registry.tax_contribution.is_zero());
        assert!(registry.swap_fee_contribution.is_zero());
    }

    #[test]
    fn json_uses_snake_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "valid.terra");
        assert_eq!(json["locked_value"][0]["amount"], "500");
        assert_eq!(
            json["swap_fee_contribution"][0]["amount"],
            "2.000000000000000000"
        );
        assert_eq!(json["tax_contribution"], serde_json::json!([]));
    }

    #[test]
    fn display_lists_every_field() {
        let text = sample().to_string();
        assert!(text.starts_with("Registry\n"));
        assert!(text.contains("Name:                valid.terra"));
        assert!(text.contains("LockedValue:         500ukrw"));
        assert!(text.contains("SwapFeeContribution: 2.000000000000000000ukrw"));
    }
}
