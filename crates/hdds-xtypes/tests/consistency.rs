// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Type consistency between reader (local) and writer (remote) types.

#![allow(clippy::cast_possible_truncation)]

use hdds_xtypes::{
    consistent, decode_from_slice, encode_to_vec, CompleteAliasType, CompleteEnumeratedLiteral,
    CompleteEnumeratedType, CompleteSequenceType, CompleteStructMember, CompleteStructType,
    CompleteTypeObject, EquivalenceHash, MinimalTypeObject, TypeConsistencyEnforcementQosPolicy,
    TypeConsistencyKind, TypeIdentifier, TypeObject, TypeRegistry,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn structure(name: &str, members: &[(&str, TypeIdentifier)]) -> TypeObject {
    let member_seq = members
        .iter()
        .enumerate()
        .map(|(i, (member, ty))| CompleteStructMember::new(i as u32, *member, ty.clone()))
        .collect();
    TypeObject::Complete(CompleteTypeObject::Struct(CompleteStructType::new(
        name, member_seq,
    )))
}

fn point() -> TypeObject {
    structure(
        "Point",
        &[("x", TypeIdentifier::TK_INT32), ("y", TypeIdentifier::TK_INT32)],
    )
}

fn point3d() -> TypeObject {
    structure(
        "Point3D",
        &[
            ("x", TypeIdentifier::TK_INT32),
            ("y", TypeIdentifier::TK_INT32),
            ("z", TypeIdentifier::TK_INT32),
        ],
    )
}

fn sequence(bound: u32) -> TypeObject {
    TypeObject::Complete(CompleteTypeObject::Sequence(CompleteSequenceType::new(
        TypeIdentifier::TK_INT32,
        bound,
    )))
}

fn color(literals: &[(&str, i32)]) -> TypeObject {
    TypeObject::Complete(CompleteTypeObject::Enumerated(CompleteEnumeratedType::new(
        "Color",
        literals
            .iter()
            .map(|(name, value)| CompleteEnumeratedLiteral::new(*name, *value))
            .collect(),
    )))
}

fn alias(name: &str, related: TypeIdentifier) -> TypeObject {
    TypeObject::Complete(CompleteTypeObject::Alias(CompleteAliasType::new(
        name, related,
    )))
}

fn all_policies() -> Vec<TypeConsistencyEnforcementQosPolicy> {
    let mut policies = Vec::new();
    for kind in [
        TypeConsistencyKind::DisallowTypeCoercion,
        TypeConsistencyKind::AllowTypeCoercion,
    ] {
        for bits in 0u8..16 {
            policies.push(
                TypeConsistencyEnforcementQosPolicy::disallow()
                    .with_kind(kind)
                    .with_ignore_member_names(bits & 1 != 0)
                    .with_ignore_sequence_bounds(bits & 2 != 0)
                    .with_ignore_string_bounds(bits & 4 != 0)
                    .with_prevent_type_widening(bits & 8 != 0),
            );
        }
    }
    policies
}

#[test]
fn extra_writer_member_allowed_with_coercion() {
    init_logging();
    let registry = TypeRegistry::new();
    let allow = TypeConsistencyEnforcementQosPolicy::allow();
    assert!(consistent(&point(), &point3d(), &allow, &registry));
}

#[test]
fn extra_writer_member_rejected_without_coercion() {
    let registry = TypeRegistry::new();
    let disallow = TypeConsistencyEnforcementQosPolicy::disallow();
    assert!(!consistent(&point(), &point3d(), &disallow, &registry));
}

#[test]
fn sequence_bounds() {
    let registry = TypeRegistry::new();
    let policy = TypeConsistencyEnforcementQosPolicy::allow().with_ignore_sequence_bounds(false);
    assert!(consistent(&sequence(10), &sequence(5), &policy, &registry));
    assert!(!consistent(&sequence(5), &sequence(10), &policy, &registry));
    // bound 0 compares as a raw value
    assert!(consistent(&sequence(10), &sequence(0), &policy, &registry));
    assert!(!consistent(&sequence(0), &sequence(10), &policy, &registry));

    let ignoring = policy.with_ignore_sequence_bounds(true);
    assert!(consistent(&sequence(5), &sequence(10), &ignoring, &registry));
}

#[test]
fn enum_literal_names_are_not_compared() {
    let registry = TypeRegistry::new();
    let local = color(&[("RED", 0), ("GREEN", 1), ("BLUE", 2)]);
    let remote = color(&[("ROT", 0), ("GRUN", 1), ("BLAU", 2)]);
    for policy in all_policies() {
        assert!(consistent(&local, &remote, &policy, &registry), "{:?}", policy);
    }
}

#[test]
fn alias_to_registered_type_is_transparent() {
    let registry = TypeRegistry::new();
    let target_id = registry
        .register_type_object(point())
        .expect("hash should compute");
    let local = alias("Position", target_id);
    let policy = TypeConsistencyEnforcementQosPolicy::default();
    assert!(consistent(&local, &point(), &policy, &registry));
}

#[test]
fn alias_to_unregistered_type_is_inconsistent() {
    init_logging();
    let registry = TypeRegistry::new();
    let local = alias(
        "Position",
        TypeIdentifier::complete(EquivalenceHash::from_bytes([0x42; 14])),
    );
    for policy in all_policies() {
        assert!(!consistent(&local, &point(), &policy, &registry));
        assert!(!consistent(&point(), &local, &policy, &registry));
    }
}

#[test]
fn alias_chain_through_registry() {
    let registry = TypeRegistry::new();
    let target_id = registry
        .register_type_object(point())
        .expect("hash should compute");
    let inner_id = registry
        .register_type_object(alias("Inner", target_id))
        .expect("hash should compute");
    let outer = alias("Outer", inner_id);

    let policy = TypeConsistencyEnforcementQosPolicy::default();
    assert!(consistent(&outer, &point3d(), &policy, &registry));
    assert!(consistent(&point(), &outer, &policy, &registry));
}

#[test]
fn alias_cycle_is_inconsistent() {
    init_logging();
    let registry = TypeRegistry::new();
    let a = TypeIdentifier::complete(EquivalenceHash::from_bytes([1; 14]));
    let b = TypeIdentifier::complete(EquivalenceHash::from_bytes([2; 14]));
    registry.register(a.clone(), alias("A", b.clone()));
    registry.register(b.clone(), alias("B", a.clone()));

    let policy = TypeConsistencyEnforcementQosPolicy::default();
    assert!(!consistent(&alias("Start", a), &point(), &policy, &registry));
}

#[test]
fn recursive_type_terminates() {
    // struct Node { sequence<Node> children; } described twice under
    // different hashes.
    let registry = TypeRegistry::new();
    let left_id = TypeIdentifier::complete(EquivalenceHash::from_bytes([0x10; 14]));
    let right_id = TypeIdentifier::complete(EquivalenceHash::from_bytes([0x20; 14]));
    let node = |own: &TypeIdentifier| {
        structure(
            "Node",
            &[("children", TypeIdentifier::sequence(own.clone(), 0))],
        )
    };
    registry.register(left_id.clone(), node(&left_id));
    registry.register(right_id.clone(), node(&right_id));

    let policy = TypeConsistencyEnforcementQosPolicy::default();
    assert!(consistent(&node(&left_id), &node(&right_id), &policy, &registry));
}

#[test]
fn identical_types_are_consistent_under_every_policy() {
    let registry = TypeRegistry::new();
    let samples = [
        point(),
        point3d(),
        sequence(0),
        sequence(16),
        color(&[("A", 0)]),
        structure("Empty", &[]),
    ];
    for policy in all_policies() {
        for sample in &samples {
            assert!(
                consistent(sample, sample, &policy, &registry),
                "{:?} / {:?}",
                policy,
                sample
            );
        }
    }
}

#[test]
fn allowing_coercion_never_rejects_more() {
    let registry = TypeRegistry::new();
    let renamed = structure(
        "Point",
        &[("a", TypeIdentifier::TK_INT32), ("b", TypeIdentifier::TK_INT32)],
    );
    let pairs = [
        (point(), point3d()),
        (point3d(), point()),
        (point(), renamed),
        (sequence(5), sequence(10)),
        (sequence(10), sequence(5)),
    ];
    for strict in all_policies()
        .into_iter()
        .filter(|p| p.kind == TypeConsistencyKind::DisallowTypeCoercion)
    {
        let relaxed = strict.with_kind(TypeConsistencyKind::AllowTypeCoercion);
        for (local, remote) in &pairs {
            if consistent(local, remote, &strict, &registry) {
                assert!(consistent(local, remote, &relaxed, &registry));
            }
        }
    }
}

#[test]
fn prevent_type_widening() {
    let registry = TypeRegistry::new();
    let widening = TypeConsistencyEnforcementQosPolicy::allow();
    let preventing = widening.with_prevent_type_widening(true);

    // writer adds a member: fine either way under ALLOW
    assert!(consistent(&point(), &point3d(), &widening, &registry));
    assert!(consistent(&point(), &point3d(), &preventing, &registry));
    // writer lacks a member the reader has
    assert!(consistent(&point3d(), &point(), &widening, &registry));
    assert!(!consistent(&point3d(), &point(), &preventing, &registry));
}

#[test]
fn complete_and_minimal_never_match() {
    let registry = TypeRegistry::new();
    let minimal = match point() {
        TypeObject::Complete(CompleteTypeObject::Struct(s)) => {
            TypeObject::Minimal(MinimalTypeObject::Struct(s.to_minimal()))
        }
        other => other,
    };
    let policy = TypeConsistencyEnforcementQosPolicy::default();
    assert!(!consistent(&point(), &minimal, &policy, &registry));
    assert!(consistent(&minimal, &minimal, &policy, &registry));
}

#[test]
fn decoded_types_stay_consistent() {
    let registry = TypeRegistry::new();
    let bytes = encode_to_vec(&point3d()).expect("encode should succeed");
    let decoded: TypeObject = decode_from_slice(&bytes).expect("decode should succeed");
    let policy = TypeConsistencyEnforcementQosPolicy::allow();
    assert!(point().is_consistent_with(&decoded, &policy, &registry));
}
