//! Transaction-side inputs to the tracking hooks: block context, messages,
//! emitted events, and the hook runner.

pub mod context;
pub mod event;
pub mod hook;
pub mod msg;
pub mod result;
pub mod runner;

pub use context::BlockContext;
pub use event::{
    ATTRIBUTE_KEY_ADDRESS, ATTRIBUTE_KEY_SWAP_COIN, ATTRIBUTE_KEY_SWAP_FEE, Attribute,
    EVENT_TYPE_SWAP, EVENT_TYPE_UNREGISTER, Event, find_attribute, find_event,
};
pub use hook::{Hook, HookFn};
pub use msg::{
    Input, Msg, MsgMultiSend, MsgRegisterSubName, MsgSend, MsgSwap, MsgUnregisterSubName, Output,
};
pub use result::ExecutionResult;
pub use runner::{DeliveredTx, HookRunner, RunnerError};
