//! Registration tracking (`nameservice/register_sub_name`,
//! `nameservice/unregister_sub_name`).

use nametrack_core::{Address, TrackingResult};
use nametrack_events::{
    ATTRIBUTE_KEY_ADDRESS, BlockContext, EVENT_TYPE_UNREGISTER, ExecutionResult, Hook, Msg,
    find_attribute, find_event,
};
use nametrack_registry::{AccountKeeper, RegistryStore, registry_of};

use crate::config::TrackingConfig;
use crate::outcome::{absorb, write_back};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Binding {
    Bound,
    Unbound,
}

/// Seeds a name's locked value with the whole balance of the address it is
/// bound to, and removes that balance again when the binding goes away.
#[derive(Debug)]
pub struct NameserviceHook<S, A> {
    store: S,
    accounts: A,
    config: TrackingConfig,
}

impl<S, A> NameserviceHook<S, A>
where
    S: RegistryStore,
    A: AccountKeeper,
{
    pub const NAME: &'static str = "nameservice";

    pub fn new(store: S, accounts: A, config: TrackingConfig) -> Self {
        Self {
            store,
            accounts,
            config,
        }
    }

    /// The unregister message names the sub-name only; the address it was
    /// bound to is reported by the `unregister` event.
    fn unbound_address(&self, result: &ExecutionResult) -> TrackingResult<Address> {
        let event = find_event(result.events(), EVENT_TYPE_UNREGISTER)?;
        let text = String::from_utf8_lossy(find_attribute(event, ATTRIBUTE_KEY_ADDRESS)?);
        Address::from_bech32(&text, &self.config.address_prefix)
    }

    fn track(&self, ctx: &BlockContext, address: &Address, binding: Binding) -> TrackingResult<()> {
        let (name_hash, mut registry) = registry_of(&self.store, address)?;

        let Some(balance) = self
            .accounts
            .account(address)
            .map(|account| account.current_balance().clone())
            .filter(|balance| !balance.is_zero())
        else {
            return Ok(());
        };

        registry.locked_value = match binding {
            Binding::Bound => registry.locked_value.add(&balance),
            Binding::Unbound => registry.locked_value.saturating_sub(&balance),
        };

        write_back(&self.store, Self::NAME, ctx, name_hash, registry);
        Ok(())
    }
}

impl<S, A> Hook for NameserviceHook<S, A>
where
    S: RegistryStore,
    A: AccountKeeper,
{
    fn name(&self) -> &str {
        Self::NAME
    }

    fn on_tx(&self, ctx: &BlockContext, msg: &Msg, result: &ExecutionResult) {
        let outcome = match msg {
            Msg::RegisterSubName(register) => self.track(ctx, &register.address, Binding::Bound),
            Msg::UnregisterSubName(_) => self
                .unbound_address(result)
                .and_then(|address| self.track(ctx, &address, Binding::Unbound)),
            _ => return,
        };
        absorb(Self::NAME, ctx, msg, outcome);
    }
}
