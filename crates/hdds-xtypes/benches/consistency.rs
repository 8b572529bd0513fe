// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type Consistency Benchmark
//!
//! Measures the work done once per reader/writer matching attempt:
//! - XCDR2 decode of a received TypeObject
//! - consistency check of a wide struct, flat and through registry hashes

#![allow(clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hdds_xtypes::{
    consistent, decode_from_slice, encode_to_vec, CompleteStructMember, CompleteStructType,
    CompleteTypeObject, TypeConsistencyEnforcementQosPolicy, TypeIdentifier, TypeObject,
    TypeRegistry,
};

fn wide_struct(name: &str, members: u32, member_type: &TypeIdentifier) -> TypeObject {
    TypeObject::Complete(CompleteTypeObject::Struct(CompleteStructType::new(
        name,
        (0..members)
            .map(|i| CompleteStructMember::new(i, format!("field_{}", i), member_type.clone()))
            .collect(),
    )))
}

fn bench_decode(c: &mut Criterion) {
    let object = wide_struct("Telemetry", 64, &TypeIdentifier::string(128));
    let bytes = encode_to_vec(&object).expect("encode");

    c.bench_function("xcdr2_decode_struct_64", |b| {
        b.iter(|| {
            let decoded: TypeObject = decode_from_slice(black_box(&bytes)).expect("decode");
            black_box(decoded)
        });
    });
}

fn bench_consistency_flat(c: &mut Criterion) {
    let registry = TypeRegistry::new();
    let policy = TypeConsistencyEnforcementQosPolicy::default();
    let local = wide_struct("Reader", 64, &TypeIdentifier::TK_FLOAT64);
    let remote = wide_struct("Writer", 80, &TypeIdentifier::TK_FLOAT64);

    c.bench_function("consistency_struct_64_vs_80", |b| {
        b.iter(|| consistent(black_box(&local), black_box(&remote), &policy, &registry));
    });
}

fn bench_consistency_nested(c: &mut Criterion) {
    let registry = TypeRegistry::new();
    let policy = TypeConsistencyEnforcementQosPolicy::default();
    let local_inner = registry
        .register_type_object(wide_struct("Inner", 16, &TypeIdentifier::TK_INT32))
        .expect("register");
    let remote_inner = registry
        .register_type_object(wide_struct("InnerV2", 20, &TypeIdentifier::TK_INT32))
        .expect("register");
    let local = wide_struct("Outer", 16, &local_inner);
    let remote = wide_struct("Outer", 16, &remote_inner);

    c.bench_function("consistency_nested_hashes", |b| {
        b.iter(|| consistent(black_box(&local), black_box(&remote), &policy, &registry));
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_consistency_flat,
    bench_consistency_nested
);
criterion_main!(benches);
