//! Ledger messages observed by the hooks.
//!
//! The set is closed: hooks pattern-match on [`Msg`] and ignore variants they do
//! not track. Anything the tracker has no rule for arrives as [`Msg::Other`].

use serde::{Deserialize, Serialize};

use nametrack_core::{Address, Coin, Coins, Name};

/// Single transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: Address,
    pub to_address: Address,
    pub amount: Coins,
}

/// One sending side of a [`MsgMultiSend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub address: Address,
    pub coins: Coins,
}

/// One receiving side of a [`MsgMultiSend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub address: Address,
    pub coins: Coins,
}

/// Batch transfer: independent input and output lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMultiSend {
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
}

/// Currency conversion of `offer_coin` into `ask_denom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSwap {
    pub trader: Address,
    pub offer_coin: Coin,
    pub ask_denom: String,
}

/// Bind `address` to `name` (signed by the parent name's `owner`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgRegisterSubName {
    pub name: Name,
    pub address: Address,
    pub owner: Address,
}

/// Unbind `name`. The vacated address is only reported through the
/// `unregister` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUnregisterSubName {
    pub name: Name,
    pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Msg {
    Send(MsgSend),
    MultiSend(MsgMultiSend),
    Swap(MsgSwap),
    RegisterSubName(MsgRegisterSubName),
    UnregisterSubName(MsgUnregisterSubName),
    /// A message no hook tracks; carries its type name for diagnostics.
    Other(String),
}

impl Msg {
    /// Stable `module/action` name, used in logs.
    pub fn msg_type(&self) -> &str {
        match self {
            Msg::Send(_) => "bank/send",
            Msg::MultiSend(_) => "bank/multisend",
            Msg::Swap(_) => "market/swap",
            Msg::RegisterSubName(_) => "nameservice/register_sub_name",
            Msg::UnregisterSubName(_) => "nameservice/unregister_sub_name",
            Msg::Other(type_name) => type_name.as_str(),
        }
    }
}

macro_rules! impl_from_msg {
    ($($variant:ident($t:ty)),* $(,)?) => {
        $(
            impl From<$t> for Msg {
                fn from(value: $t) -> Self {
                    Msg::$variant(value)
                }
            }
        )*
    };
}

impl_from_msg!(
    Send(MsgSend),
    MultiSend(MsgMultiSend),
    Swap(MsgSwap),
    RegisterSubName(MsgRegisterSubName),
    UnregisterSubName(MsgUnregisterSubName),
);

#[cfg(test)]
mod tests {
    use super::*;
    use nametrack_core::ADDRESS_LEN;

    #[test]
    fn msg_types_are_stable() {
        let addr = Address::new([1; ADDRESS_LEN]);
        let swap: Msg = MsgSwap {
            trader: addr,
            offer_coin: Coin::new("uluna", 1),
            ask_denom: "ukrw".to_string(),
        }
        .into();
        assert_eq!(swap.msg_type(), "market/swap");
        assert_eq!(Msg::Other("oracle/vote".into()).msg_type(), "oracle/vote");
    }

    #[test]
    fn serializes_with_type_tag() {
        let addr = Address::new([2; ADDRESS_LEN]);
        let msg: Msg = MsgUnregisterSubName {
            name: Name::parse("valid.terra").unwrap(),
            owner: addr,
        }
        .into();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "UnregisterSubName");
        assert_eq!(json["value"]["name"], "valid.terra");
        assert_eq!(json["value"]["owner"], addr.to_string());
    }
}
