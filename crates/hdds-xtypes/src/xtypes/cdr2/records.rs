// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field-order codecs for every non-union record.
//!
//! Field order follows the XTypes IDL declaration order.

use super::impl_cdr2_struct;
use crate::xtypes::type_information::*;
use crate::xtypes::type_object::*;

// --- Details ---
impl_cdr2_struct!(CompleteTypeDetail { ann_builtin, ann_custom, type_name });
impl_cdr2_struct!(MinimalTypeDetail {});
impl_cdr2_struct!(CompleteMemberDetail { name, ann_builtin, ann_custom });
impl_cdr2_struct!(MinimalMemberDetail { name_hash });
impl_cdr2_struct!(CompleteElementDetail { ann_builtin, ann_custom });

// --- Applied annotations ---
impl_cdr2_struct!(AppliedAnnotationParameter { paramname_hash, value });
impl_cdr2_struct!(AppliedAnnotation { annotation_typeid, param_seq });
impl_cdr2_struct!(AppliedVerbatimAnnotation { placement, language, text });
impl_cdr2_struct!(AppliedBuiltinTypeAnnotations { verbatim });
impl_cdr2_struct!(AppliedBuiltinMemberAnnotations { unit, min, max, hash_id });

// --- Annotation types ---
impl_cdr2_struct!(CommonAnnotationParameter { member_flags, member_type_id });
impl_cdr2_struct!(CompleteAnnotationParameter { common, name, default_value });
impl_cdr2_struct!(MinimalAnnotationParameter { common, name_hash, default_value });
impl_cdr2_struct!(CompleteAnnotationHeader { annotation_name });
impl_cdr2_struct!(MinimalAnnotationHeader {});
impl_cdr2_struct!(CompleteAnnotationType { annotation_flag, header, member_seq });
impl_cdr2_struct!(MinimalAnnotationType { annotation_flag, header, member_seq });

// --- Structures ---
impl_cdr2_struct!(CommonStructMember { member_id, member_flags, member_type_id });
impl_cdr2_struct!(CompleteStructMember { common, detail });
impl_cdr2_struct!(MinimalStructMember { common, detail });
impl_cdr2_struct!(CompleteStructHeader { base_type, detail });
impl_cdr2_struct!(MinimalStructHeader { base_type, detail });
impl_cdr2_struct!(CompleteStructType { struct_flags, header, member_seq });
impl_cdr2_struct!(MinimalStructType { struct_flags, header, member_seq });

// --- Unions ---
impl_cdr2_struct!(CommonUnionMember { member_id, member_flags, type_id, label_seq });
impl_cdr2_struct!(CompleteUnionMember { common, detail });
impl_cdr2_struct!(MinimalUnionMember { common, detail });
impl_cdr2_struct!(CommonDiscriminatorMember { member_flags, type_id });
impl_cdr2_struct!(CompleteDiscriminatorMember { common, ann_builtin, ann_custom });
impl_cdr2_struct!(MinimalDiscriminatorMember { common });
impl_cdr2_struct!(CompleteUnionHeader { detail });
impl_cdr2_struct!(MinimalUnionHeader { detail });
impl_cdr2_struct!(CompleteUnionType { union_flags, header, discriminator, member_seq });
impl_cdr2_struct!(MinimalUnionType { union_flags, header, discriminator, member_seq });

// --- Aliases ---
impl_cdr2_struct!(CommonAliasBody { related_flags, related_type });
impl_cdr2_struct!(CompleteAliasBody { common, ann_builtin, ann_custom });
impl_cdr2_struct!(MinimalAliasBody { common });
impl_cdr2_struct!(CompleteAliasHeader { detail });
impl_cdr2_struct!(MinimalAliasHeader {});
impl_cdr2_struct!(CompleteAliasType { alias_flags, header, body });
impl_cdr2_struct!(MinimalAliasType { alias_flags, header, body });

// --- Collections ---
impl_cdr2_struct!(CommonCollectionElement { element_flags, type_id });
impl_cdr2_struct!(CompleteCollectionElement { common, detail });
impl_cdr2_struct!(MinimalCollectionElement { common });
impl_cdr2_struct!(CommonCollectionHeader { bound });
impl_cdr2_struct!(CompleteCollectionHeader { common, detail });
impl_cdr2_struct!(MinimalCollectionHeader { common });
impl_cdr2_struct!(CompleteSequenceType { collection_flag, header, element });
impl_cdr2_struct!(MinimalSequenceType { collection_flag, header, element });
impl_cdr2_struct!(CommonArrayHeader { bound_seq });
impl_cdr2_struct!(CompleteArrayHeader { common, detail });
impl_cdr2_struct!(MinimalArrayHeader { common });
impl_cdr2_struct!(CompleteArrayType { collection_flag, header, element });
impl_cdr2_struct!(MinimalArrayType { collection_flag, header, element });
impl_cdr2_struct!(CompleteMapType { collection_flag, header, key, element });
impl_cdr2_struct!(MinimalMapType { collection_flag, header, key, element });

// --- Enumerations and bitmasks ---
impl_cdr2_struct!(CommonEnumeratedLiteral { value, flags });
impl_cdr2_struct!(CompleteEnumeratedLiteral { common, detail });
impl_cdr2_struct!(MinimalEnumeratedLiteral { common, detail });
impl_cdr2_struct!(CommonEnumeratedHeader { bit_bound });
impl_cdr2_struct!(CompleteEnumeratedHeader { common, detail });
impl_cdr2_struct!(MinimalEnumeratedHeader { common });
impl_cdr2_struct!(CompleteEnumeratedType { enum_flags, header, literal_seq });
impl_cdr2_struct!(MinimalEnumeratedType { enum_flags, header, literal_seq });
impl_cdr2_struct!(CommonBitflag { position, flags });
impl_cdr2_struct!(CompleteBitflag { common, detail });
impl_cdr2_struct!(MinimalBitflag { common, detail });
impl_cdr2_struct!(CompleteBitmaskType { bitmask_flags, header, flag_seq });
impl_cdr2_struct!(MinimalBitmaskType { bitmask_flags, header, flag_seq });

// --- Bitsets ---
impl_cdr2_struct!(CommonBitfield { position, flags, bitcount, holder_type });
impl_cdr2_struct!(CompleteBitfield { common, detail });
impl_cdr2_struct!(MinimalBitfield { common, name_hash });
impl_cdr2_struct!(CompleteBitsetHeader { base_type, detail });
impl_cdr2_struct!(MinimalBitsetHeader { base_type });
impl_cdr2_struct!(CompleteBitsetType { bitset_flags, header, field_seq });
impl_cdr2_struct!(MinimalBitsetType { bitset_flags, header, field_seq });

// --- Type information ---
impl_cdr2_struct!(TypeIdentifierTypeObjectPair { type_identifier, type_object });
impl_cdr2_struct!(TypeIdentifierPair { type_identifier1, type_identifier2 });
impl_cdr2_struct!(TypeIdentifierWithSize { type_id, typeobject_serialized_size });
impl_cdr2_struct!(TypeIdentifierWithDependencies {
    typeid_with_size,
    dependent_typeid_count,
    dependent_typeids
});
impl_cdr2_struct!(TypeInformation { minimal, complete });
