//! Topping registry: the set of topping names that are valid for the menu
//! currently loaded.
//!
//! Topping names are declared by each menu file, so the registry is a growable
//! table keyed by canonical (upper-case) name rather than a fixed enum.
//! Entries are append-only and keep their insertion order; the only way to
//! drop entries is [`ToppingRegistry::reset`].
//!
//! One registry is owned by whoever drives a load and passed by reference to
//! the parser. It has no internal locking: loads that share a registry must be
//! serialised by the caller.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::ingredients::Topping;

/// Insertion-ordered table of registered toppings.
#[derive(Debug, Clone, Default)]
pub struct ToppingRegistry {
    entries: IndexMap<String, Topping>,
}

/// Canonical comparison form of a topping name.
fn canonical(name: &str) -> String {
    name.to_uppercase()
}

impl ToppingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new topping.
    ///
    /// Fails if the name is blank or if a topping with the same canonical
    /// name already exists. Registering twice is an error, not a no-op.
    pub fn register(&mut self, name: &str, vegan: bool) -> RegistryResult<Topping> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidTopping {
                name: name.to_string(),
            });
        }
        let key = canonical(name);
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateTopping { name: key });
        }

        let topping = Topping::new(key.clone(), vegan);
        debug!(topping = %key, vegan, "registered topping");
        self.entries.insert(key, topping.clone());
        Ok(topping)
    }

    /// Look up a topping by name, ignoring case.
    ///
    /// A blank name counts as no name at all and yields
    /// [`RegistryError::NullName`].
    pub fn lookup(&self, name: &str) -> RegistryResult<Topping> {
        if name.trim().is_empty() {
            return Err(RegistryError::NullName);
        }
        self.entries
            .get(&canonical(name))
            .cloned()
            .ok_or_else(|| RegistryError::UnknownTopping {
                name: name.to_string(),
            })
    }

    /// Whether a topping with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&canonical(name))
    }

    /// Snapshot of all toppings in registration order.
    ///
    /// The returned vector is detached from the registry.
    pub fn enumerate(&self) -> Vec<Topping> {
        self.entries.values().cloned().collect()
    }

    /// Iterate over the registered toppings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Topping> {
        self.entries.values()
    }

    /// Number of registered toppings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no toppings are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard every entry.
    pub fn reset(&mut self) {
        if !self.entries.is_empty() {
            debug!(count = self.entries.len(), "resetting topping registry");
        }
        self.entries.clear();
    }
}
