//! Transfer tracking (`bank/send`, `bank/multisend`).

use nametrack_core::{Address, Coins, TrackingResult};
use nametrack_events::{BlockContext, ExecutionResult, Hook, Msg};
use nametrack_registry::{RegistryStore, TreasuryKeeper, registry_of};

use crate::config::TrackingConfig;
use crate::outcome::{absorb, write_back};
use crate::tax::treasury_tax;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    Sender,
    Receiver,
}

/// Moves transferred value in and out of registered names' locked value, and
/// charges the sender's name with the stability tax the transfer incurred.
///
/// Every participant is handled independently: an unregistered sender does not
/// stop a registered receiver from being credited.
#[derive(Debug)]
pub struct BankHook<S, T> {
    store: S,
    treasury: T,
    config: TrackingConfig,
}

impl<S, T> BankHook<S, T>
where
    S: RegistryStore,
    T: TreasuryKeeper,
{
    pub const NAME: &'static str = "bank";

    pub fn new(store: S, treasury: T, config: TrackingConfig) -> Self {
        Self {
            store,
            treasury,
            config,
        }
    }

    fn track(&self, ctx: &BlockContext, address: &Address, amount: &Coins, side: Side) -> TrackingResult<()> {
        if amount.is_zero() {
            return Ok(());
        }

        let (name_hash, mut registry) = registry_of(&self.store, address)?;

        match side {
            Side::Sender => {
                let taxes = treasury_tax(&self.treasury, &self.config.exempt_denom, amount);
                registry.locked_value = registry.locked_value.saturating_sub(amount);
                registry.tax_contribution = registry.tax_contribution.add(&taxes);
            }
            Side::Receiver => {
                registry.locked_value = registry.locked_value.add(amount);
            }
        }

        write_back(&self.store, Self::NAME, ctx, name_hash, registry);
        Ok(())
    }

    fn track_each(&self, ctx: &BlockContext, msg: &Msg, address: &Address, amount: &Coins, side: Side) {
        absorb(Self::NAME, ctx, msg, self.track(ctx, address, amount, side));
    }
}

impl<S, T> Hook for BankHook<S, T>
where
    S: RegistryStore,
    T: TreasuryKeeper,
{
    fn name(&self) -> &str {
        Self::NAME
    }

    fn on_tx(&self, ctx: &BlockContext, msg: &Msg, _result: &ExecutionResult) {
        match msg {
            Msg::Send(send) => {
                self.track_each(ctx, msg, &send.from_address, &send.amount, Side::Sender);
                self.track_each(ctx, msg, &send.to_address, &send.amount, Side::Receiver);
            }
            Msg::MultiSend(multi) => {
                for input in &multi.inputs {
                    self.track_each(ctx, msg, &input.address, &input.coins, Side::Sender);
                }
                for output in &multi.outputs {
                    self.track_each(ctx, msg, &output.address, &output.coins, Side::Receiver);
                }
            }
            _ => {}
        }
    }
}
