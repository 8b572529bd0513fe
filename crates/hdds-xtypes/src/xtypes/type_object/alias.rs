// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Alias (typedef) descriptions.

use super::annotations::{AppliedAnnotation, AppliedBuiltinMemberAnnotations};
use super::details::CompleteTypeDetail;
use super::flags::{AliasMemberFlag, AliasTypeFlag};
use crate::xtypes::TypeIdentifier;

#[derive(Debug, Clone, PartialEq)]
pub struct CommonAliasBody {
    pub related_flags: AliasMemberFlag,
    /// Aliased type
    pub related_type: TypeIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteAliasBody {
    pub common: CommonAliasBody,
    pub ann_builtin: Option<AppliedBuiltinMemberAnnotations>,
    pub ann_custom: Option<Vec<AppliedAnnotation>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalAliasBody {
    pub common: CommonAliasBody,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompleteAliasHeader {
    pub detail: CompleteTypeDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinimalAliasHeader {}

/// CompleteAliasType - named typedef of another type
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteAliasType {
    pub alias_flags: AliasTypeFlag,
    pub header: CompleteAliasHeader,
    pub body: CompleteAliasBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalAliasType {
    pub alias_flags: AliasTypeFlag,
    pub header: MinimalAliasHeader,
    pub body: MinimalAliasBody,
}

impl CompleteAliasType {
    pub fn new(type_name: impl Into<String>, related_type: TypeIdentifier) -> Self {
        Self {
            alias_flags: AliasTypeFlag::empty(),
            header: CompleteAliasHeader {
                detail: CompleteTypeDetail::new(type_name),
            },
            body: CompleteAliasBody {
                common: CommonAliasBody {
                    related_flags: AliasMemberFlag::empty(),
                    related_type,
                },
                ann_builtin: None,
                ann_custom: None,
            },
        }
    }

    pub fn related_type(&self) -> &TypeIdentifier {
        &self.body.common.related_type
    }
}

impl MinimalAliasType {
    pub fn new(related_type: TypeIdentifier) -> Self {
        Self {
            alias_flags: AliasTypeFlag::empty(),
            header: MinimalAliasHeader {},
            body: MinimalAliasBody {
                common: CommonAliasBody {
                    related_flags: AliasMemberFlag::empty(),
                    related_type,
                },
            },
        }
    }

    pub fn related_type(&self) -> &TypeIdentifier {
        &self.body.common.related_type
    }
}
