// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type consistency (assignability) between a local and a remote type.
//!
//! DDS-XTypes v1.3 Section 7.2.4 / 7.6.3.4: a reader is matched with a writer
//! when the writer's type is consistent with the reader's type under the
//! reader's [`TypeConsistencyEnforcementQosPolicy`].
//!
//! # Rules
//!
//! - Complete and Minimal objects are never compared with each other.
//! - Aliases are transparent: both sides are resolved through the
//!   [`TypeLookup`] before kinds are compared.
//! - Type names are not compared; member names follow `ignore_member_names`.
//! - Member lists follow the sequence rule (see [`Vec`] impl below).
//!
//! Recursive types terminate: a hash pair already under comparison is taken
//! as consistent, alias chains are checked for cycles, and nesting is capped
//! at [`MAX_CONSISTENCY_DEPTH`].

mod records;
mod type_identifier;

use super::registry::TypeLookup;
use super::type_object::{CompleteTypeObject, MinimalTypeObject, TypeObject};
use super::TypeIdentifier;
use crate::qos::TypeConsistencyEnforcementQosPolicy;
use std::fmt;
use std::sync::Arc;

/// Maximum nesting of type comparisons before giving up
pub const MAX_CONSISTENCY_DEPTH: usize = 64;

/// Structural consistency between two values of the same record type.
///
/// `self` is the local (reader) side, `other` the remote (writer) side; the
/// relation is not symmetric.
pub trait Consistent {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool;
}

/// State threaded through one consistency check.
pub struct ConsistencyContext<'a> {
    policy: &'a TypeConsistencyEnforcementQosPolicy,
    registry: &'a dyn TypeLookup,
    depth: usize,
    /// Hash pairs currently being compared (recursive types)
    in_progress: Vec<(TypeIdentifier, TypeIdentifier)>,
}

/// Check whether `remote` may be matched with `local` under `policy`.
pub fn consistent(
    local: &TypeObject,
    remote: &TypeObject,
    policy: &TypeConsistencyEnforcementQosPolicy,
    registry: &dyn TypeLookup,
) -> bool {
    let mut ctx = ConsistencyContext::new(policy, registry);
    local.consistent(remote, &mut ctx)
}

impl TypeObject {
    /// Method form of [`consistent`], with `self` as the local type.
    pub fn is_consistent_with(
        &self,
        remote: &TypeObject,
        policy: &TypeConsistencyEnforcementQosPolicy,
        registry: &dyn TypeLookup,
    ) -> bool {
        consistent(self, remote, policy, registry)
    }
}

/// Which endpoint a resolved type belongs to (log messages only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Local,
    Remote,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Local => write!(f, "Local"),
            Side::Remote => write!(f, "Remote"),
        }
    }
}

/// Outcome of following hash references and aliases.
pub(crate) enum Resolved {
    /// Registered non-alias object
    Object(Arc<TypeObject>),
    /// Chain ended on an inline identifier (primitive, string, plain collection)
    Inline(TypeIdentifier),
}

impl<'a> ConsistencyContext<'a> {
    pub fn new(
        policy: &'a TypeConsistencyEnforcementQosPolicy,
        registry: &'a dyn TypeLookup,
    ) -> Self {
        Self {
            policy,
            registry,
            depth: 0,
            in_progress: Vec::new(),
        }
    }

    pub fn policy(&self) -> &TypeConsistencyEnforcementQosPolicy {
        self.policy
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Member names (or name hashes) must be equal.
    pub(crate) fn names_must_match(&self) -> bool {
        !(self.policy.allows_coercion() && self.policy.ignore_member_names)
    }

    /// Collection bound rule. Bounds compare as raw values.
    pub(crate) fn collection_bound_ok(&self, local: u32, remote: u32) -> bool {
        (self.policy.allows_coercion() && self.policy.ignore_sequence_bounds)
            || local >= remote
    }

    /// Array dimensions: same rank, each dimension under the collection bound rule.
    pub(crate) fn array_bounds_ok(&self, local: &[u32], remote: &[u32]) -> bool {
        local.len() == remote.len()
            && local
                .iter()
                .zip(remote)
                .all(|(l, r)| self.collection_bound_ok(*l, *r))
    }

    /// String bound rule. Bounds compare as raw values.
    pub(crate) fn string_bound_ok(&self, local: u32, remote: u32) -> bool {
        (self.policy.allows_coercion() && self.policy.ignore_string_bounds)
            || local >= remote
    }

    /// Enum / bitmask bit_bound rule.
    pub(crate) fn bit_bound_ok(&self, local: u16, remote: u16) -> bool {
        (self.policy.allows_coercion() && !self.policy.prevent_type_widening) || local == remote
    }

    /// Run `check` one level deeper, failing once the depth cap is reached.
    pub(crate) fn nested(&mut self, check: impl FnOnce(&mut Self) -> bool) -> bool {
        if self.depth >= MAX_CONSISTENCY_DEPTH {
            log::warn!(
                "[XTYPES] Type consistency check exceeded maximum depth {}",
                MAX_CONSISTENCY_DEPTH
            );
            return false;
        }
        self.depth += 1;
        let result = check(self);
        self.depth -= 1;
        result
    }

    /// Follow hash references and alias bodies until a non-alias object or an
    /// inline identifier is reached.
    ///
    /// `through_alias` tells whether `start` is already the target of an alias.
    pub(crate) fn resolve(
        &self,
        start: &TypeIdentifier,
        side: Side,
        through_alias: bool,
    ) -> Option<Resolved> {
        let mut current = start.clone();
        let mut visited: Vec<TypeIdentifier> = Vec::new();
        let mut aliased = through_alias;

        loop {
            if !current.is_hashed() {
                return Some(Resolved::Inline(current));
            }
            if visited.contains(&current) {
                log::warn!("[XTYPES] {} type alias chain is cyclic at {:?}", side, current);
                return None;
            }
            if visited.len() >= MAX_CONSISTENCY_DEPTH {
                log::warn!(
                    "[XTYPES] {} type alias chain longer than {}",
                    side,
                    MAX_CONSISTENCY_DEPTH
                );
                return None;
            }

            let Some(object) = self.registry.lookup(&current) else {
                if aliased {
                    log::warn!("[XTYPES] {} type is aliased to an unknown TypeObject", side);
                } else {
                    log::warn!(
                        "[XTYPES] {} type references an unknown TypeObject {:?}",
                        side,
                        current
                    );
                }
                return None;
            };

            let next = match alias_target(&object) {
                Some(target) => target.clone(),
                None => return Some(Resolved::Object(object)),
            };
            visited.push(current);
            current = next;
            aliased = true;
        }
    }

    /// Consistency of two identifiers where at least one is a hash reference.
    pub(crate) fn hashed_consistent(
        &mut self,
        local: &TypeIdentifier,
        remote: &TypeIdentifier,
    ) -> bool {
        if local == remote {
            return true;
        }
        let pair = (local.clone(), remote.clone());
        if self.in_progress.contains(&pair) {
            return true;
        }

        let Some(local) = self.resolve(local, Side::Local, false) else {
            return false;
        };
        let Some(remote) = self.resolve(remote, Side::Remote, false) else {
            return false;
        };

        match (&local, &remote) {
            (Resolved::Object(l), Resolved::Object(r)) => {
                self.in_progress.push(pair);
                let result = l.as_ref().consistent(r.as_ref(), self);
                self.in_progress.pop();
                result
            }
            (Resolved::Inline(l), Resolved::Inline(r)) => l.consistent(r, self),
            _ => false,
        }
    }
}

fn alias_target(object: &TypeObject) -> Option<&TypeIdentifier> {
    match object {
        TypeObject::Complete(CompleteTypeObject::Alias(alias)) => Some(alias.related_type()),
        TypeObject::Minimal(MinimalTypeObject::Alias(alias)) => Some(alias.related_type()),
        _ => None,
    }
}

/// Sequence rule for member lists.
///
/// - DISALLOW: lengths must be equal.
/// - DISALLOW or `prevent_type_widening`: the remote may not have fewer
///   members than the local; the local prefix is compared.
/// - Otherwise the common prefix is compared.
impl<T: Consistent> Consistent for Vec<T> {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        let policy = *ctx.policy();
        if !policy.allows_coercion() && self.len() != other.len() {
            return false;
        }
        if (!policy.allows_coercion() || policy.prevent_type_widening) && self.len() > other.len()
        {
            return false;
        }
        self.iter().zip(other).all(|(l, r)| l.consistent(r, ctx))
    }
}

impl Consistent for TypeObject {
    fn consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool {
        match (self, other) {
            (TypeObject::Complete(l), TypeObject::Complete(r)) => l.consistent(r, ctx),
            (TypeObject::Minimal(l), TypeObject::Minimal(r)) => l.consistent(r, ctx),
            _ => {
                log::debug!(
                    "[XTYPES] TypeObject representation mismatch: 0x{:02x} vs 0x{:02x}",
                    self.discriminator(),
                    other.discriminator()
                );
                false
            }
        }
    }
}

/// Complete and Minimal representations share the alias-resolving entry.
pub(crate) trait Representation: Sized {
    fn alias_target(&self) -> Option<&TypeIdentifier>;

    /// Same representation view of a registered object.
    fn from_object(object: &TypeObject) -> Option<&Self>;

    /// Kind dispatch once aliases are removed.
    fn body_consistent(&self, other: &Self, ctx: &mut ConsistencyContext<'_>) -> bool;
}

enum Target<'a, R> {
    Object(&'a R),
    Inline(&'a TypeIdentifier),
}

fn target<'a, R: Representation>(
    here: &'a R,
    resolved: Option<&'a Resolved>,
) -> Option<Target<'a, R>> {
    match resolved {
        None => Some(Target::Object(here)),
        Some(Resolved::Object(object)) => R::from_object(object).map(Target::Object),
        Some(Resolved::Inline(id)) => Some(Target::Inline(id)),
    }
}

pub(crate) fn resolve_and_compare<R: Representation>(
    local: &R,
    remote: &R,
    ctx: &mut ConsistencyContext<'_>,
) -> bool {
    ctx.nested(|ctx| {
        let local_resolved = match local.alias_target() {
            Some(related) => match ctx.resolve(related, Side::Local, true) {
                Some(resolved) => Some(resolved),
                None => return false,
            },
            None => None,
        };
        let remote_resolved = match remote.alias_target() {
            Some(related) => match ctx.resolve(related, Side::Remote, true) {
                Some(resolved) => Some(resolved),
                None => return false,
            },
            None => None,
        };

        match (
            target(local, local_resolved.as_ref()),
            target(remote, remote_resolved.as_ref()),
        ) {
            (Some(Target::Object(l)), Some(Target::Object(r))) => l.body_consistent(r, ctx),
            (Some(Target::Inline(l)), Some(Target::Inline(r))) => l.consistent(r, ctx),
            _ => false,
        }
    })
}
