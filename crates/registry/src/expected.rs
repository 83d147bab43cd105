//! Contracts of the modules the tracker only reads from.

use serde::{Deserialize, Serialize};

use nametrack_core::{Address, Coins, Dec};

/// Expected treasury module: current stability-tax parameters.
pub trait TreasuryKeeper: Send + Sync {
    fn tax_rate(&self) -> Dec;

    /// Maximum tax charged per transfer for `denom`.
    fn tax_cap(&self, denom: &str) -> u128;
}

/// Snapshot of an account as seen after the transaction was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    pub coins: Coins,
}

impl Account {
    pub fn new(address: Address, coins: Coins) -> Self {
        Self { address, coins }
    }

    pub fn current_balance(&self) -> &Coins {
        &self.coins
    }
}

/// Expected account module.
pub trait AccountKeeper: Send + Sync {
    fn account(&self, address: &Address) -> Option<Account>;
}

impl<T: TreasuryKeeper + ?Sized> TreasuryKeeper for std::sync::Arc<T> {
    fn tax_rate(&self) -> Dec {
        (**self).tax_rate()
    }

    fn tax_cap(&self, denom: &str) -> u128 {
        (**self).tax_cap(denom)
    }
}

impl<T: AccountKeeper + ?Sized> AccountKeeper for std::sync::Arc<T> {
    fn account(&self, address: &Address) -> Option<Account> {
        (**self).account(address)
    }
}
