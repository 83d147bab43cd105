//! Typed events emitted while a transaction executes, and lookups over them.
//!
//! Events are the only place some facts exist after execution (the realized
//! swap output, the address a sub-name was unbound from). Both lookups here are
//! total: absence is reported as [`TrackingError`] `NotFound`, never a panic.

use serde::{Deserialize, Serialize};

use nametrack_core::{TrackingError, TrackingResult};

/// Emitted by the market module for every executed swap.
pub const EVENT_TYPE_SWAP: &str = "swap";
/// Realized output coin, `<integer><denom>`.
pub const ATTRIBUTE_KEY_SWAP_COIN: &str = "swap_coin";
/// Realized fee, `<decimal><denom>`.
pub const ATTRIBUTE_KEY_SWAP_FEE: &str = "swap_fee";

/// Emitted by the nameservice module when a sub-name is unbound.
pub const EVENT_TYPE_UNREGISTER: &str = "unregister";
/// Bech32 text of the address that lost its name.
pub const ATTRIBUTE_KEY_ADDRESS: &str = "address";

/// One key/value pair of an [`Event`]. Keys and values are opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl Attribute {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A typed event: a tag plus ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub attributes: Vec<Attribute>,
}

impl Event {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }
}

/// First event of `event_type` in emission order.
pub fn find_event<'a>(events: &'a [Event], event_type: &str) -> TrackingResult<&'a Event> {
    events
        .iter()
        .find(|e| e.event_type == event_type)
        .ok_or_else(|| TrackingError::event_not_found(event_type))
}

/// Value of the first attribute named `key`.
pub fn find_attribute<'a>(event: &'a Event, key: &str) -> TrackingResult<&'a [u8]> {
    event
        .attributes
        .iter()
        .find(|a| a.key == key.as_bytes())
        .map(|a| a.value.as_slice())
        .ok_or_else(|| TrackingError::attribute_not_found(&event.event_type, key))
}
