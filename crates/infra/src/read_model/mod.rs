//! Registry storage.

pub mod registry_store;

pub use registry_store::InMemoryRegistryStore;
