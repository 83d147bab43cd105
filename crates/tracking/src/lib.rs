//! Name registry tracking hooks.
//!
//! Each hook runs after a transaction has been applied and updates the shadow
//! accounting of registered names (locked value, tax and swap fee
//! contributions). Pure domain logic: collaborators are injected, no IO.

pub mod bank;
pub mod config;
pub mod market;
pub mod nameservice;
mod outcome;
pub mod tax;

pub use bank::BankHook;
pub use config::{ENV_ADDRESS_PREFIX, ENV_EXEMPT_DENOM, TrackingConfig};
pub use market::MarketHook;
pub use nameservice::NameserviceHook;
pub use tax::{compute_tax, treasury_tax};

use nametrack_events::HookRunner;
use nametrack_registry::{AccountKeeper, RegistryStore, TreasuryKeeper};

/// Runner with the bank, market and nameservice hooks, in that order.
pub fn standard_hooks<S, T, A>(store: S, treasury: T, accounts: A, config: TrackingConfig) -> HookRunner
where
    S: RegistryStore + Clone + 'static,
    T: TreasuryKeeper + 'static,
    A: AccountKeeper + 'static,
{
    let mut runner = HookRunner::new();
    runner
        .register(BankHook::new(store.clone(), treasury, config.clone()))
        .register(MarketHook::new(store.clone()))
        .register(NameserviceHook::new(store, accounts, config));
    runner
}
