//! Infrastructure adapters: in-memory implementations of the collaborator
//! contracts (registry store, account lookup, treasury) for tests and dev.

pub mod accounts;
pub mod read_model;
pub mod treasury;

pub use accounts::InMemoryAccountKeeper;
pub use read_model::InMemoryRegistryStore;
pub use treasury::FixedTreasury;
