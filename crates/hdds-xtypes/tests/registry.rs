// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// TypeRegistry: append-only registration shared across threads.

use hdds_xtypes::{
    consistent, CompleteStructMember, CompleteStructType, CompleteTypeObject,
    TypeConsistencyEnforcementQosPolicy, TypeIdentifier, TypeLookup, TypeObject, TypeRegistry,
};
use std::sync::Arc;
use std::thread;

fn numbered_struct(n: u32) -> TypeObject {
    TypeObject::Complete(CompleteTypeObject::Struct(CompleteStructType::new(
        format!("T{}", n),
        vec![CompleteStructMember::new(n, format!("m{}", n), TypeIdentifier::TK_UINT32)],
    )))
}

#[test]
fn concurrent_registration_keeps_first_entry() {
    let registry = Arc::new(TypeRegistry::new());
    let shared_id = TypeIdentifier::TK_NONE;

    let handles: Vec<_> = (0..8u32)
        .map(|t| {
            let registry = Arc::clone(&registry);
            let shared_id = shared_id.clone();
            thread::spawn(move || {
                let mut ids = Vec::new();
                for n in 0..50u32 {
                    let id = registry
                        .register_type_object(numbered_struct(t * 1000 + n))
                        .expect("hash should compute");
                    ids.push(id);
                }
                let won = registry.register(shared_id, numbered_struct(t));
                (ids, won)
            })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        let (ids, won) = handle.join().expect("thread should not panic");
        for id in ids {
            assert!(registry.contains(&id));
        }
        if won {
            winners += 1;
        }
    }

    assert_eq!(winners, 1, "exactly one thread inserts the shared id");
    assert_eq!(registry.len(), 8 * 50 + 1);
}

#[test]
fn register_is_insert_if_absent() {
    let registry = TypeRegistry::new();
    let id = TypeIdentifier::TK_INT32;
    assert!(registry.register(id.clone(), numbered_struct(1)));
    assert!(!registry.register(id.clone(), numbered_struct(2)));

    let stored = registry.lookup(&id).expect("entry should exist");
    assert_eq!(*stored, numbered_struct(1));
}

#[test]
fn hash_identifier_is_deterministic() {
    let registry = TypeRegistry::new();
    let first = registry
        .register_type_object(numbered_struct(7))
        .expect("hash should compute");
    let second = numbered_struct(7)
        .type_identifier()
        .expect("hash should compute");
    assert_eq!(first, second);
    assert!(first.is_hashed());
    assert_eq!(registry.len(), 1);
}

#[test]
fn names_bind_once() {
    let registry = TypeRegistry::new();
    let id = registry
        .register_type_object(numbered_struct(3))
        .expect("hash should compute");
    assert!(registry.register_name("T3", id.clone()));
    assert!(!registry.register_name("T3", TypeIdentifier::TK_NONE));
    assert_eq!(registry.identifier_for_name("T3"), Some(id));
    assert_eq!(registry.identifier_for_name("missing"), None);
}

#[test]
fn shared_registry_serves_consistency_checks() {
    let registry: Arc<dyn TypeLookup> = Arc::new(TypeRegistry::new());
    let policy = TypeConsistencyEnforcementQosPolicy::default();
    let sample = numbered_struct(1);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let sample = sample.clone();
            thread::spawn(move || consistent(&sample, &sample, &policy, registry.as_ref()))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread should not panic"));
    }
}
