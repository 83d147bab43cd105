use std::sync::Arc;

use nametrack_core::{Address, NameHash, TrackingError, TrackingResult};

use crate::Registry;

/// Name registry storage as seen by the hooks.
///
/// Methods take `&self`: implementations own their interior mutability, the
/// way the host's key/value store does.
pub trait RegistryStore: Send + Sync {
    fn registry(&self, name_hash: &NameHash) -> Option<Registry>;
    fn set_registry(&self, name_hash: NameHash, registry: Registry);

    /// Address → name hash (at most one name per address).
    fn reverse_resolve(&self, address: &Address) -> Option<NameHash>;
    fn set_reverse_resolve(&self, address: Address, name_hash: NameHash);

    /// (name hash, child hash) → address bound to that (sub-)name.
    fn resolve(&self, name_hash: &NameHash, child_hash: &NameHash) -> Option<Address>;
    fn set_resolve(&self, name_hash: NameHash, child_hash: NameHash, address: Address);
}

impl<S> RegistryStore for Arc<S>
where
    S: RegistryStore + ?Sized,
{
    fn registry(&self, name_hash: &NameHash) -> Option<Registry> {
        (**self).registry(name_hash)
    }

    fn set_registry(&self, name_hash: NameHash, registry: Registry) {
        (**self).set_registry(name_hash, registry)
    }

    fn reverse_resolve(&self, address: &Address) -> Option<NameHash> {
        (**self).reverse_resolve(address)
    }

    fn set_reverse_resolve(&self, address: Address, name_hash: NameHash) {
        (**self).set_reverse_resolve(address, name_hash)
    }

    fn resolve(&self, name_hash: &NameHash, child_hash: &NameHash) -> Option<Address> {
        (**self).resolve(name_hash, child_hash)
    }

    fn set_resolve(&self, name_hash: NameHash, child_hash: NameHash, address: Address) {
        (**self).set_resolve(name_hash, child_hash, address)
    }
}

/// Registry bound to `address`, via the reverse index.
pub fn registry_of<S: RegistryStore + ?Sized>(
    store: &S,
    address: &Address,
) -> TrackingResult<(NameHash, Registry)> {
    let name_hash = store
        .reverse_resolve(address)
        .ok_or_else(|| TrackingError::registry_not_found(address.to_string()))?;
    let registry = store
        .registry(&name_hash)
        .ok_or_else(|| TrackingError::registry_not_found(name_hash.to_string()))?;
    Ok((name_hash, registry))
}
