//! Swap tracking (`market/swap`).
//!
//! The offer leaves the trader's locked value before the swap event is
//! inspected. If the event turns out to be missing or malformed, that
//! subtraction is still written back: there is no rollback.

use nametrack_core::{Coin, Coins, DecCoin, DecCoins, TrackingResult};
use nametrack_events::{
    ATTRIBUTE_KEY_SWAP_COIN, ATTRIBUTE_KEY_SWAP_FEE, BlockContext, EVENT_TYPE_SWAP, Event,
    ExecutionResult, Hook, Msg, MsgSwap, find_attribute, find_event,
};
use nametrack_registry::{Registry, RegistryStore, registry_of};

use crate::outcome::{absorb, write_back};

/// Realized result of a swap, as reported by the market module.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SwapOutcome {
    swap_coin: Coin,
    swap_fee: DecCoin,
}

impl SwapOutcome {
    fn from_events(events: &[Event]) -> TrackingResult<Self> {
        let event = find_event(events, EVENT_TYPE_SWAP)?;
        let swap_coin = attribute_text(event, ATTRIBUTE_KEY_SWAP_COIN)?.parse::<Coin>()?;
        let swap_fee = attribute_text(event, ATTRIBUTE_KEY_SWAP_FEE)?.parse::<DecCoin>()?;
        Ok(Self {
            swap_coin,
            swap_fee,
        })
    }

    fn apply(self, registry: &mut Registry) {
        if !self.swap_coin.is_zero() {
            registry.locked_value = registry.locked_value.add(&Coins::from(self.swap_coin));
        }
        if !self.swap_fee.is_zero() {
            registry.swap_fee_contribution = registry
                .swap_fee_contribution
                .add(&DecCoins::from(self.swap_fee));
        }
    }
}

fn attribute_text(event: &Event, key: &str) -> TrackingResult<String> {
    find_attribute(event, key).map(|bytes| String::from_utf8_lossy(bytes).into_owned())
}

/// Tracks the value a registered trader gives up and receives in a swap, plus
/// the fee attributed to the name.
#[derive(Debug)]
pub struct MarketHook<S> {
    store: S,
}

impl<S: RegistryStore> MarketHook<S> {
    pub const NAME: &'static str = "market";

    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn track(&self, ctx: &BlockContext, msg: &Msg, swap: &MsgSwap, result: &ExecutionResult) -> TrackingResult<()> {
        if swap.offer_coin.is_zero() {
            return Ok(());
        }

        let (name_hash, mut registry) = registry_of(&self.store, &swap.trader)?;
        registry.locked_value = registry
            .locked_value
            .saturating_sub(&Coins::from(swap.offer_coin.clone()));

        let outcome = SwapOutcome::from_events(result.events());
        match outcome {
            Ok(outcome) => outcome.apply(&mut registry),
            Err(err) => absorb(Self::NAME, ctx, msg, Err(err)),
        }

        write_back(&self.store, Self::NAME, ctx, name_hash, registry);
        Ok(())
    }
}

impl<S: RegistryStore> Hook for MarketHook<S> {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn on_tx(&self, ctx: &BlockContext, msg: &Msg, result: &ExecutionResult) {
        if let Msg::Swap(swap) = msg {
            absorb(Self::NAME, ctx, msg, self.track(ctx, msg, swap, result));
        }
    }
}
