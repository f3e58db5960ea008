// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Name dispatch over the compact tables.
//!
//! Type names are bucketed by [`name_hash`]; names sharing their first
//! [`NAME_HASH_PREFIX`] characters share a bucket and are resolved by exact
//! comparison. The index is built from the static tables once, on first
//! use, and never changes afterwards.

use super::{known_type, EXTRA_MEMBERS, KNOWN_MEMBERS, KNOWN_TYPES};
use crate::config::{NAME_HASH_MULTIPLIER, NAME_HASH_PREFIX, TYPE_ID_MAX};
use std::collections::HashMap;
use std::ops::Range;
use std::sync::OnceLock;

/// Rolling hash over the first [`NAME_HASH_PREFIX`] characters.
pub(crate) fn name_hash(name: &str) -> u32 {
    name.chars()
        .take(NAME_HASH_PREFIX)
        .fold(0u32, |hash, c| {
            hash.wrapping_mul(NAME_HASH_MULTIPLIER).wrapping_add(c as u32)
        })
}

/// Where a by-name member lookup landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MemberRoute {
    /// Compact member, by id magnitude.
    Known(u16),
    /// Extra member, by index into `EXTRA_MEMBERS`.
    Extra(usize),
}

struct NameIndex {
    /// Hash bucket -> type ids (magnitudes) sharing it.
    buckets: HashMap<u32, Vec<u16>>,
    /// Per type (id - 1): declared compact members as a table range.
    declared: Vec<Range<usize>>,
    /// Per type (id - 1): extra members as a range into `EXTRA_MEMBERS`.
    extras: Vec<Range<usize>>,
}

static INDEX: OnceLock<NameIndex> = OnceLock::new();

fn index() -> &'static NameIndex {
    INDEX.get_or_init(build_index)
}

fn build_index() -> NameIndex {
    let mut buckets: HashMap<u32, Vec<u16>> = HashMap::with_capacity(KNOWN_TYPES.len());
    for (i, record) in KNOWN_TYPES.iter().enumerate() {
        buckets
            .entry(name_hash(record.name))
            .or_default()
            .push(i as u16 + 1);
    }

    let declared = owner_ranges(KNOWN_MEMBERS.iter().map(|m| m.owner));
    let extras = owner_ranges(EXTRA_MEMBERS.iter().map(|m| m.owner));

    log::debug!(
        "[registry] name index: {} types in {} buckets",
        KNOWN_TYPES.len(),
        buckets.len()
    );
    NameIndex {
        buckets,
        declared,
        extras,
    }
}

/// Contiguous row range per owner, for a table sorted by owner.
fn owner_ranges(owners: impl Iterator<Item = u16>) -> Vec<Range<usize>> {
    let mut ranges = vec![0..0; usize::from(TYPE_ID_MAX)];
    for (row, owner) in owners.enumerate() {
        let slot = &mut ranges[usize::from(owner) - 1];
        if slot.start == slot.end {
            *slot = row..row + 1;
        } else {
            slot.end = row + 1;
        }
    }
    ranges
}

/// Compact type id magnitude for an exact type name.
pub(crate) fn type_id(name: &str) -> Option<u16> {
    index()
        .buckets
        .get(&name_hash(name))?
        .iter()
        .copied()
        .find(|&id| known_type(id).name == name)
}

/// Resolve `owner.member`, walking the owner's base chain.
///
/// At each type the compact members are searched before the extras.
/// Attached and instance members live in separate namespaces: `attached`
/// selects which one is searched.
pub(crate) fn member_route(owner: &str, member: &str, attached: bool) -> Option<MemberRoute> {
    let index = index();
    let mut current = type_id(owner)?;
    while current != 0 {
        let at = usize::from(current) - 1;

        if let Some(row) = index.declared[at].clone().find(|&row| {
            let record = &KNOWN_MEMBERS[row];
            record.name == member && record.is_attachable() == attached
        }) {
            return Some(MemberRoute::Known(row as u16 + 1));
        }

        if let Some(row) = index.extras[at].clone().find(|&row| {
            let record = &EXTRA_MEMBERS[row];
            record.name == member && record.is_attachable() == attached
        }) {
            return Some(MemberRoute::Extra(row));
        }

        current = known_type(current).base;
    }
    None
}

#[cfg(test)]
pub(super) fn bucket_of(name: &str) -> Vec<u16> {
    index()
        .buckets
        .get(&name_hash(name))
        .cloned()
        .unwrap_or_default()
}
