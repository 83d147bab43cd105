use std::collections::HashMap;
use std::sync::RwLock;

use nametrack_core::{Address, Coins};
use nametrack_registry::{Account, AccountKeeper};

/// In-memory account balances for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryAccountKeeper {
    balances: RwLock<HashMap<Address, Coins>>,
}

impl InMemoryAccountKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(&self, address: Address, coins: Coins) {
        if let Ok(mut balances) = self.balances.write() {
            balances.insert(address, coins);
        }
    }

    pub fn with_balance(self, address: Address, coins: Coins) -> Self {
        self.set_balance(address, coins);
        self
    }
}

impl AccountKeeper for InMemoryAccountKeeper {
    fn account(&self, address: &Address) -> Option<Account> {
        let balances = self.balances.read().ok()?;
        balances
            .get(address)
            .map(|coins| Account::new(*address, coins.clone()))
    }
}
