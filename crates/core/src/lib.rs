//! Value primitives shared by the tracking hooks.
//!
//! This crate is **pure** (no IO, no clocks, no floats): coin sets, fixed-point
//! decimals, addresses and name hashes must behave identically on every replica.

pub mod coin;
pub mod coin_set;
pub mod dec;
pub mod error;
pub mod id;
pub mod name;

pub use coin::{Amount, Coin, Coins, validate_denom};
pub use coin_set::CoinSet;
pub use dec::{DEC_PRECISION, Dec, DecCoin, DecCoins};
pub use error::{ErrorKind, TrackingError, TrackingResult};
pub use id::{ADDRESS_LEN, Address, DEFAULT_ADDRESS_PREFIX, NameHash, parse_prefix};
pub use name::Name;
