// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enumerated and bitmask descriptions.

use super::details::{CompleteMemberDetail, CompleteTypeDetail, MinimalMemberDetail};
use super::flags::{BitflagFlag, BitmaskTypeFlag, EnumTypeFlag, EnumeratedLiteralFlag};

/// Default bit bound for enums without @bit_bound
pub const DEFAULT_ENUM_BIT_BOUND: u16 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonEnumeratedLiteral {
    pub value: i32,
    pub flags: EnumeratedLiteralFlag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteEnumeratedLiteral {
    pub common: CommonEnumeratedLiteral,
    pub detail: CompleteMemberDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalEnumeratedLiteral {
    pub common: CommonEnumeratedLiteral,
    pub detail: MinimalMemberDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonEnumeratedHeader {
    pub bit_bound: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteEnumeratedHeader {
    pub common: CommonEnumeratedHeader,
    pub detail: CompleteTypeDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimalEnumeratedHeader {
    pub common: CommonEnumeratedHeader,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteEnumeratedType {
    pub enum_flags: EnumTypeFlag,
    pub header: CompleteEnumeratedHeader,
    pub literal_seq: Vec<CompleteEnumeratedLiteral>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalEnumeratedType {
    pub enum_flags: EnumTypeFlag,
    pub header: MinimalEnumeratedHeader,
    pub literal_seq: Vec<MinimalEnumeratedLiteral>,
}

// ============================================================================
// Bitmask
// ============================================================================

/// Bitmask headers share the enumerated layout.
pub type CommonBitmaskHeader = CommonEnumeratedHeader;
pub type CompleteBitmaskHeader = CompleteEnumeratedHeader;
pub type MinimalBitmaskHeader = MinimalEnumeratedHeader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonBitflag {
    pub position: u16,
    pub flags: BitflagFlag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteBitflag {
    pub common: CommonBitflag,
    pub detail: CompleteMemberDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalBitflag {
    pub common: CommonBitflag,
    pub detail: MinimalMemberDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteBitmaskType {
    pub bitmask_flags: BitmaskTypeFlag,
    pub header: CompleteBitmaskHeader,
    pub flag_seq: Vec<CompleteBitflag>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalBitmaskType {
    pub bitmask_flags: BitmaskTypeFlag,
    pub header: MinimalBitmaskHeader,
    pub flag_seq: Vec<MinimalBitflag>,
}

impl CompleteEnumeratedLiteral {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            common: CommonEnumeratedLiteral {
                value,
                flags: EnumeratedLiteralFlag::empty(),
            },
            detail: CompleteMemberDetail::new(name),
        }
    }
}

impl MinimalEnumeratedLiteral {
    pub fn new(name: &str, value: i32) -> Self {
        Self {
            common: CommonEnumeratedLiteral {
                value,
                flags: EnumeratedLiteralFlag::empty(),
            },
            detail: MinimalMemberDetail::from_name(name),
        }
    }
}

impl CompleteEnumeratedType {
    /// Enum with the default 32-bit bound.
    pub fn new(type_name: impl Into<String>, literal_seq: Vec<CompleteEnumeratedLiteral>) -> Self {
        Self {
            enum_flags: EnumTypeFlag::empty(),
            header: CompleteEnumeratedHeader {
                common: CommonEnumeratedHeader {
                    bit_bound: DEFAULT_ENUM_BIT_BOUND,
                },
                detail: CompleteTypeDetail::new(type_name),
            },
            literal_seq,
        }
    }

    pub fn with_bit_bound(mut self, bit_bound: u16) -> Self {
        self.header.common.bit_bound = bit_bound;
        self
    }
}

impl MinimalEnumeratedType {
    pub fn new(literal_seq: Vec<MinimalEnumeratedLiteral>) -> Self {
        Self {
            enum_flags: EnumTypeFlag::empty(),
            header: MinimalEnumeratedHeader {
                common: CommonEnumeratedHeader {
                    bit_bound: DEFAULT_ENUM_BIT_BOUND,
                },
            },
            literal_seq,
        }
    }

    pub fn with_bit_bound(mut self, bit_bound: u16) -> Self {
        self.header.common.bit_bound = bit_bound;
        self
    }
}

impl CompleteBitflag {
    pub fn new(name: impl Into<String>, position: u16) -> Self {
        Self {
            common: CommonBitflag {
                position,
                flags: BitflagFlag::empty(),
            },
            detail: CompleteMemberDetail::new(name),
        }
    }
}

impl MinimalBitflag {
    pub fn new(name: &str, position: u16) -> Self {
        Self {
            common: CommonBitflag {
                position,
                flags: BitflagFlag::empty(),
            },
            detail: MinimalMemberDetail::from_name(name),
        }
    }
}

impl CompleteBitmaskType {
    pub fn new(
        type_name: impl Into<String>,
        bit_bound: u16,
        flag_seq: Vec<CompleteBitflag>,
    ) -> Self {
        Self {
            bitmask_flags: BitmaskTypeFlag::empty(),
            header: CompleteEnumeratedHeader {
                common: CommonEnumeratedHeader { bit_bound },
                detail: CompleteTypeDetail::new(type_name),
            },
            flag_seq,
        }
    }
}

impl MinimalBitmaskType {
    pub fn new(bit_bound: u16, flag_seq: Vec<MinimalBitflag>) -> Self {
        Self {
            bitmask_flags: BitmaskTypeFlag::empty(),
            header: MinimalEnumeratedHeader {
                common: CommonEnumeratedHeader { bit_bound },
            },
            flag_seq,
        }
    }
}
