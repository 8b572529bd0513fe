// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Consistency of TypeIdentifiers.

use super::{ConsistencyContext, Consistent};
use crate::xtypes::TypeIdentifier;

impl Consistent for TypeIdentifier {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        match (self, other) {
            (TypeIdentifier::Primitive(l), TypeIdentifier::Primitive(r)) => l == r,

            (TypeIdentifier::String8 { bound: l }, TypeIdentifier::String8 { bound: r })
            | (TypeIdentifier::String16 { bound: l }, TypeIdentifier::String16 { bound: r }) => {
                ctx.string_bound_ok(*l, *r)
            }

            (
                TypeIdentifier::PlainSequence {
                    bound: local_bound,
                    element: local_element,
                    ..
                },
                TypeIdentifier::PlainSequence {
                    bound: remote_bound,
                    element: remote_element,
                    ..
                },
            ) => {
                ctx.collection_bound_ok(*local_bound, *remote_bound)
                    && ctx.nested(|ctx| (**local_element).consistent(remote_element, ctx))
            }

            (
                TypeIdentifier::PlainArray {
                    bounds: local_bounds,
                    element: local_element,
                    ..
                },
                TypeIdentifier::PlainArray {
                    bounds: remote_bounds,
                    element: remote_element,
                    ..
                },
            ) => {
                ctx.array_bounds_ok(local_bounds, remote_bounds)
                    && ctx.nested(|ctx| (**local_element).consistent(remote_element, ctx))
            }

            (
                TypeIdentifier::PlainMap {
                    bound: local_bound,
                    key: local_key,
                    element: local_element,
                    ..
                },
                TypeIdentifier::PlainMap {
                    bound: remote_bound,
                    key: remote_key,
                    element: remote_element,
                    ..
                },
            ) => {
                ctx.collection_bound_ok(*local_bound, *remote_bound)
                    && ctx.nested(|ctx| {
                        (**local_key).consistent(remote_key, ctx)
                            && (**local_element).consistent(remote_element, ctx)
                    })
            }

            (TypeIdentifier::StronglyConnected(l), TypeIdentifier::StronglyConnected(r)) => l == r,

            (l, r) if l.is_hashed() || r.is_hashed() => ctx.hashed_consistent(l, r),

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qos::TypeConsistencyEnforcementQosPolicy;
    use crate::xtypes::registry::TypeRegistry;
    use crate::xtypes::type_object::*;
    use crate::xtypes::{EquivalenceHash, TypeObject};

    fn check(
        local: &TypeIdentifier,
        remote: &TypeIdentifier,
        policy: &TypeConsistencyEnforcementQosPolicy,
        registry: &TypeRegistry,
    ) -> bool {
        let mut ctx = ConsistencyContext::new(policy, registry);
        local.consistent(remote, &mut ctx)
    }

    #[test]
    fn test_primitives() {
        let registry = TypeRegistry::new();
        let policy = TypeConsistencyEnforcementQosPolicy::default();
        assert!(check(&TypeIdentifier::TK_INT32, &TypeIdentifier::TK_INT32, &policy, &registry));
        assert!(!check(&TypeIdentifier::TK_INT32, &TypeIdentifier::TK_UINT32, &policy, &registry));
        assert!(!check(&TypeIdentifier::TK_INT32, &TypeIdentifier::string(0), &policy, &registry));
    }

    #[test]
    fn test_string_bounds() {
        let registry = TypeRegistry::new();
        let strict = TypeConsistencyEnforcementQosPolicy::allow();
        let s = TypeIdentifier::string;
        assert!(check(&s(64), &s(32), &strict, &registry));
        assert!(!check(&s(32), &s(64), &strict, &registry));
        assert!(check(&s(1000), &s(0), &strict, &registry));
        assert!(!check(&s(0), &s(1000), &strict, &registry));
        assert!(!check(&s(8), &TypeIdentifier::wstring(8), &strict, &registry));

        let relaxed = strict.with_ignore_string_bounds(true);
        assert!(check(&s(32), &s(64), &relaxed, &registry));
    }

    #[test]
    fn test_plain_collections() {
        let registry = TypeRegistry::new();
        let strict = TypeConsistencyEnforcementQosPolicy::allow();

        let seq10 = TypeIdentifier::sequence(TypeIdentifier::TK_INT32, 10);
        let seq5 = TypeIdentifier::sequence(TypeIdentifier::TK_INT32, 5);
        assert!(check(&seq10, &seq5, &strict, &registry));
        assert!(!check(&seq5, &seq10, &strict, &registry));

        let seq_f = TypeIdentifier::sequence(TypeIdentifier::TK_FLOAT32, 10);
        assert!(!check(&seq10, &seq_f, &strict, &registry));

        let arr = TypeIdentifier::array(TypeIdentifier::TK_INT32, vec![2, 3]);
        let arr_other = TypeIdentifier::array(TypeIdentifier::TK_INT32, vec![3, 2]);
        let arr_flat = TypeIdentifier::array(TypeIdentifier::TK_INT32, vec![6]);
        assert!(check(&arr, &arr.clone(), &strict, &registry));
        assert!(!check(&arr, &arr_other, &strict, &registry));
        assert!(!check(&arr, &arr_flat, &strict, &registry));

        let map = TypeIdentifier::map(TypeIdentifier::string(0), TypeIdentifier::TK_INT32, 0);
        let map_key = TypeIdentifier::map(TypeIdentifier::TK_INT32, TypeIdentifier::TK_INT32, 0);
        assert!(check(&map, &map.clone(), &strict, &registry));
        assert!(!check(&map, &map_key, &strict, &registry));
    }

    #[test]
    fn test_hash_references() {
        let registry = TypeRegistry::new();
        let policy = TypeConsistencyEnforcementQosPolicy::default();

        let a = TypeObject::Complete(CompleteTypeObject::Struct(CompleteStructType::new(
            "A",
            vec![CompleteStructMember::new(0, "x", TypeIdentifier::TK_INT32)],
        )));
        let b = TypeObject::Complete(CompleteTypeObject::Struct(CompleteStructType::new(
            "B",
            vec![
                CompleteStructMember::new(0, "x", TypeIdentifier::TK_INT32),
                CompleteStructMember::new(1, "y", TypeIdentifier::TK_INT32),
            ],
        )));
        let a_id = registry.register_type_object(a).expect("hash should compute");
        let b_id = registry.register_type_object(b).expect("hash should compute");

        assert!(check(&a_id, &a_id, &policy, &registry));
        assert!(check(&a_id, &b_id, &policy, &registry));
        assert!(!check(&b_id, &a_id, &policy.with_prevent_type_widening(true), &registry));

        let unknown = TypeIdentifier::complete(EquivalenceHash::from_bytes([3; 14]));
        assert!(!check(&a_id, &unknown, &policy, &registry));
        assert!(!check(&a_id, &TypeIdentifier::TK_INT32, &policy, &registry));
    }

    #[test]
    fn test_hash_alias_to_primitive() {
        let registry = TypeRegistry::new();
        let policy = TypeConsistencyEnforcementQosPolicy::default();
        let my_long = TypeObject::Complete(CompleteTypeObject::Alias(CompleteAliasType::new(
            "MyLong",
            TypeIdentifier::TK_INT32,
        )));
        let my_long_id = registry.register_type_object(my_long).expect("hash should compute");

        assert!(check(&my_long_id, &TypeIdentifier::TK_INT32, &policy, &registry));
        assert!(check(&TypeIdentifier::TK_INT32, &my_long_id, &policy, &registry));
        assert!(!check(&my_long_id, &TypeIdentifier::TK_INT16, &policy, &registry));
    }
}
