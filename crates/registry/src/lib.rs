//! Name registry record and the collaborator contracts the hooks consume.
//!
//! Nothing here owns storage: the registry store, treasury and account lookup
//! are traits implemented by the host (or by `nametrack-infra` for tests/dev).

pub mod expected;
pub mod registry;
pub mod store;

pub use expected::{Account, AccountKeeper, TreasuryKeeper};
pub use registry::Registry;
pub use store::{RegistryStore, registry_of};
