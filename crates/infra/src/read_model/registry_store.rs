use std::collections::HashMap;
use std::sync::RwLock;

use nametrack_core::{Address, NameHash};
use nametrack_registry::{Registry, RegistryStore};

#[derive(Debug, Default)]
struct Tables {
    registries: HashMap<NameHash, Registry>,
    reverse: HashMap<Address, NameHash>,
    resolve: HashMap<(NameHash, NameHash), Address>,
}

/// In-memory registry store for tests/dev.
///
/// Lock poisoning degrades to "not found" on reads and a dropped write, the
/// same way the hooks treat any other missing record.
#[derive(Debug, Default)]
pub struct InMemoryRegistryStore {
    inner: RwLock<Tables>,
}

impl InMemoryRegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored registry records.
    pub fn len(&self) -> usize {
        self.inner.read().map(|t| t.registries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every registry, sorted by name hash.
    pub fn list(&self) -> Vec<(NameHash, Registry)> {
        let tables = match self.inner.read() {
            Ok(t) => t,
            Err(_) => return vec![],
        };
        let mut out: Vec<_> = tables
            .registries
            .iter()
            .map(|(k, v)| (*k, v.clone()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// Bind `address` to `registry` under its name: stores the record and both
    /// resolve directions. Mirrors what the nameservice does at registration.
    pub fn bind(&self, address: Address, registry: Registry) -> NameHash {
        let (name_hash, child_hash) = registry.name.name_hash();
        self.set_registry(name_hash, registry);
        self.set_resolve(name_hash, child_hash, address);
        self.set_reverse_resolve(address, name_hash);
        name_hash
    }
}

impl RegistryStore for InMemoryRegistryStore {
    fn registry(&self, name_hash: &NameHash) -> Option<Registry> {
        let tables = self.inner.read().ok()?;
        tables.registries.get(name_hash).cloned()
    }

    fn set_registry(&self, name_hash: NameHash, registry: Registry) {
        if let Ok(mut tables) = self.inner.write() {
            tables.registries.insert(name_hash, registry);
        } else {
            tracing::warn!(%name_hash, "registry store poisoned; write dropped");
        }
    }

    fn reverse_resolve(&self, address: &Address) -> Option<NameHash> {
        let tables = self.inner.read().ok()?;
        tables.reverse.get(address).copied()
    }

    fn set_reverse_resolve(&self, address: Address, name_hash: NameHash) {
        if let Ok(mut tables) = self.inner.write() {
            tables.reverse.insert(address, name_hash);
        }
    }

    fn resolve(&self, name_hash: &NameHash, child_hash: &NameHash) -> Option<Address> {
        let tables = self.inner.read().ok()?;
        tables.resolve.get(&(*name_hash, *child_hash)).copied()
    }

    fn set_resolve(&self, name_hash: NameHash, child_hash: NameHash, address: Address) {
        if let Ok(mut tables) = self.inner.write() {
            tables.resolve.insert((name_hash, child_hash), address);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use nametrack_core::{ADDRESS_LEN, Name};
    use nametrack_registry::registry_of;

    use super::*;

    fn registry(name: &str, owner: Address) -> Registry {
        Registry::new(Name::parse(name).unwrap(), owner, Utc::now())
    }

    #[test]
    fn bind_populates_all_indexes() {
        let store = InMemoryRegistryStore::new();
        let addr = Address::new([9; ADDRESS_LEN]);
        let name = Name::parse("wallet.valid.terra").unwrap();
        let (hash, child) = name.name_hash();

        let bound = store.bind(addr, registry("wallet.valid.terra", addr));
        assert_eq!(bound, hash);
        assert_eq!(store.reverse_resolve(&addr), Some(hash));
        assert_eq!(store.resolve(&hash, &child), Some(addr));
        assert_eq!(store.len(), 1);

        let (found_hash, found) = registry_of(&store, &addr).unwrap();
        assert_eq!(found_hash, hash);
        assert_eq!(found.name, name);
    }

    #[test]
    fn unknown_address_is_not_found() {
        let store = Arc::new(InMemoryRegistryStore::new());
        let addr = Address::new([1; ADDRESS_LEN]);
        assert!(registry_of(&store, &addr).unwrap_err().is_not_found());

        // reverse entry pointing at a missing record
        store.set_reverse_resolve(addr, NameHash::new([5; 32]));
        assert!(registry_of(&store, &addr).unwrap_err().is_not_found());
    }
}
