// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide type registry.
//!
//! Discovery threads register TypeObjects as they learn about them and the
//! consistency engine resolves hash references through [`TypeLookup`].
//!
//! The registry is append-only: an identifier, once visible, always maps to
//! the same `Arc<TypeObject>`, so lookups can be shared across threads
//! without further locking. Create one at middleware start-up and pass it
//! by reference (or `Arc`) to everything that needs it.

use super::{TypeIdentifier, TypeObject};
use crate::error::Result;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolve a TypeIdentifier to a previously registered TypeObject.
pub trait TypeLookup: Send + Sync {
    /// Returns `None` if the identifier is unknown.
    fn lookup(&self, id: &TypeIdentifier) -> Option<Arc<TypeObject>>;
}

/// Append-only concurrent TypeIdentifier -> TypeObject map
///
/// # Example
///
/// ```ignore
/// use hdds_xtypes::TypeRegistry;
///
/// let registry = TypeRegistry::new();
/// let id = registry.register_type_object(point_type_object)?;
/// assert!(registry.lookup(&id).is_some());
/// ```
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: DashMap<TypeIdentifier, Arc<TypeObject>>,
    // type name -> identifier; written rarely
    names: RwLock<HashMap<String, TypeIdentifier>>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `object` under `id` unless `id` is already present.
    ///
    /// Returns `true` if this call inserted the entry. An existing entry is
    /// never replaced.
    pub fn register(&self, id: TypeIdentifier, object: TypeObject) -> bool {
        match self.types.entry(id) {
            Entry::Occupied(existing) => {
                if existing.get().as_ref() != &object {
                    log::warn!(
                        "[XTYPES] Registry already holds a different TypeObject for {:?}",
                        existing.key()
                    );
                }
                false
            }
            Entry::Vacant(slot) => {
                log::trace!("[XTYPES] Registered TypeObject for {:?}", slot.key());
                slot.insert(Arc::new(object));
                true
            }
        }
    }

    /// Register `object` under its hash-derived identifier and return it.
    pub fn register_type_object(&self, object: TypeObject) -> Result<TypeIdentifier> {
        let id = object.type_identifier()?;
        self.register(id.clone(), object);
        Ok(id)
    }

    /// Bind a type name to an identifier (first binding wins).
    pub fn register_name(&self, name: impl Into<String>, id: TypeIdentifier) -> bool {
        let mut names = self.names.write();
        let name = name.into();
        if names.contains_key(&name) {
            return false;
        }
        names.insert(name, id);
        true
    }

    pub fn identifier_for_name(&self, name: &str) -> Option<TypeIdentifier> {
        self.names.read().get(name).cloned()
    }

    pub fn lookup(&self, id: &TypeIdentifier) -> Option<Arc<TypeObject>> {
        self.types.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, id: &TypeIdentifier) -> bool {
        self.types.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeLookup for TypeRegistry {
    fn lookup(&self, id: &TypeIdentifier) -> Option<Arc<TypeObject>> {
        TypeRegistry::lookup(self, id)
    }
}

impl<T: TypeLookup + ?Sized> TypeLookup for Arc<T> {
    fn lookup(&self, id: &TypeIdentifier) -> Option<Arc<TypeObject>> {
        (**self).lookup(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xtypes::type_object::*;
    use crate::xtypes::EquivalenceHash;

    fn alias_object(target: TypeIdentifier) -> TypeObject {
        TypeObject::Minimal(MinimalTypeObject::Alias(MinimalAliasType::new(target)))
    }

    #[test]
    fn test_register_is_insert_if_absent() {
        let registry = TypeRegistry::new();
        let id = TypeIdentifier::Minimal(EquivalenceHash::from_bytes([1; 14]));

        assert!(registry.register(id.clone(), alias_object(TypeIdentifier::TK_INT32)));
        assert!(!registry.register(id.clone(), alias_object(TypeIdentifier::TK_INT64)));

        let stored = registry.lookup(&id).expect("entry should exist");
        assert_eq!(*stored, alias_object(TypeIdentifier::TK_INT32));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_missing() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup(&TypeIdentifier::TK_INT32).is_none());
        assert!(!registry.contains(&TypeIdentifier::TK_INT32));
    }

    #[test]
    fn test_names_first_binding_wins() {
        let registry = TypeRegistry::new();
        let a = TypeIdentifier::Complete(EquivalenceHash::from_bytes([2; 14]));
        let b = TypeIdentifier::Complete(EquivalenceHash::from_bytes([3; 14]));
        assert!(registry.register_name("Point", a.clone()));
        assert!(!registry.register_name("Point", b));
        assert_eq!(registry.identifier_for_name("Point"), Some(a));
        assert_eq!(registry.identifier_for_name("Other"), None);
    }

    #[test]
    fn test_lookup_through_trait_object() {
        let registry = Arc::new(TypeRegistry::new());
        let id = TypeIdentifier::Minimal(EquivalenceHash::from_bytes([4; 14]));
        registry.register(id.clone(), alias_object(TypeIdentifier::TK_UINT8));

        let lookup: &dyn TypeLookup = &registry;
        assert!(lookup.lookup(&id).is_some());
    }
}
