// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Member and type flag bitsets per OMG DDS-XTypes v1.3 (Section 7.3.4.5).
//!
//! Flags travel on the wire for fidelity. The consistency engine does not
//! inspect them.

use std::ops::BitOr;

macro_rules! flag_newtype {
    ($(#[$doc:meta])* $name:ident { $($(#[$cdoc:meta])* $konst:ident = $bit:expr),* $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub u16);

        impl $name {
            $($(#[$cdoc])* pub const $konst: Self = Self($bit);)*

            pub const fn empty() -> Self {
                Self(0)
            }

            pub const fn bits(self) -> u16 {
                self.0
            }

            pub const fn contains(self, flag: Self) -> bool {
                (self.0 & flag.0) == flag.0 && flag.0 != 0
            }
        }

        impl BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }
    };
}

flag_newtype! {
    /// MemberFlag - flags carried by members, literals, elements and discriminators
    MemberFlag {
        TRY_CONSTRUCT1 = 0x0001,
        TRY_CONSTRUCT2 = 0x0002,
        /// @external
        IS_EXTERNAL = 0x0004,
        /// @optional
        IS_OPTIONAL = 0x0008,
        /// @must_understand
        IS_MUST_UNDERSTAND = 0x0010,
        /// @key
        IS_KEY = 0x0020,
        /// @default (union member or enum literal)
        IS_DEFAULT = 0x0040,
    }
}

flag_newtype! {
    /// TypeFlag - flags carried by type-level records
    TypeFlag {
        /// @final extensibility
        IS_FINAL = 0x0001,
        /// @appendable extensibility
        IS_APPENDABLE = 0x0002,
        /// @mutable extensibility
        IS_MUTABLE = 0x0004,
        /// @nested
        IS_NESTED = 0x0008,
        /// @autoid(HASH)
        IS_AUTOID_HASH = 0x0010,
    }
}

pub type CollectionElementFlag = MemberFlag;
pub type StructMemberFlag = MemberFlag;
pub type UnionMemberFlag = MemberFlag;
pub type UnionDiscriminatorFlag = MemberFlag;
pub type EnumeratedLiteralFlag = MemberFlag;
pub type AnnotationParameterFlag = MemberFlag;
pub type AliasMemberFlag = MemberFlag;
pub type BitflagFlag = MemberFlag;
pub type BitsetMemberFlag = MemberFlag;

pub type StructTypeFlag = TypeFlag;
pub type UnionTypeFlag = TypeFlag;
pub type CollectionTypeFlag = TypeFlag;
pub type AnnotationTypeFlag = TypeFlag;
pub type AliasTypeFlag = TypeFlag;
pub type EnumTypeFlag = TypeFlag;
pub type BitmaskTypeFlag = TypeFlag;
pub type BitsetTypeFlag = TypeFlag;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_flag_combination() {
        let flags = MemberFlag::IS_KEY | MemberFlag::IS_MUST_UNDERSTAND;
        assert!(flags.contains(MemberFlag::IS_KEY));
        assert!(flags.contains(MemberFlag::IS_MUST_UNDERSTAND));
        assert!(!flags.contains(MemberFlag::IS_OPTIONAL));
        assert!(!flags.contains(MemberFlag::empty()));
        assert_eq!(flags.bits(), 0x0030);
    }

    #[test]
    fn test_type_flag_extensibility() {
        let flags = TypeFlag::IS_APPENDABLE;
        assert!(flags.contains(TypeFlag::IS_APPENDABLE));
        assert!(!flags.contains(TypeFlag::IS_FINAL));
        assert_eq!(TypeFlag::default(), TypeFlag::empty());
    }
}
