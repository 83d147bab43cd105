use std::collections::HashMap;

use nametrack_core::Dec;
use nametrack_registry::TreasuryKeeper;

/// Treasury with constant parameters: one rate, per-denom caps and a default cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTreasury {
    rate: Dec,
    default_cap: u128,
    caps: HashMap<String, u128>,
}

impl FixedTreasury {
    pub fn new(rate: Dec, default_cap: u128) -> Self {
        Self {
            rate,
            default_cap,
            caps: HashMap::new(),
        }
    }

    pub fn with_cap(mut self, denom: impl Into<String>, cap: u128) -> Self {
        self.caps.insert(denom.into(), cap);
        self
    }
}

impl TreasuryKeeper for FixedTreasury {
    fn tax_rate(&self) -> Dec {
        self.rate
    }

    fn tax_cap(&self, denom: &str) -> u128 {
        self.caps.get(denom).copied().unwrap_or(self.default_cap)
    }
}
