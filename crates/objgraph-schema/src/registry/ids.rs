// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Identifier cache: wire id -> published descriptor.
//!
//! One slot per compact id. A slot is empty until its descriptor is
//! published, then never changes. Reads are a single atomic load.

use crate::config::{MEMBER_ID_MAX, TYPE_ID_MAX};
use crate::descriptor::{MemberDescriptor, TypeDescriptor};
use crate::error::{Error, Result};
use arc_swap::ArcSwapOption;
use std::sync::Arc;

/// Magnitude of a type wire id, validated against the compact range.
pub(crate) fn type_index(id: i16) -> Result<u16> {
    wire_magnitude(id, TYPE_ID_MAX)
}

/// Magnitude of a member wire id, validated against the compact range.
pub(crate) fn member_index(id: i16) -> Result<u16> {
    wire_magnitude(id, MEMBER_ID_MAX)
}

fn wire_magnitude(id: i16, max: u16) -> Result<u16> {
    if id >= 0 {
        return Err(Error::InvalidIdentifier(id));
    }
    let magnitude = id.unsigned_abs();
    if magnitude > max {
        return Err(Error::UnknownIdentifier(id));
    }
    Ok(magnitude)
}

fn empty_slots<T>(len: usize) -> Box<[ArcSwapOption<T>]> {
    (0..len).map(|_| ArcSwapOption::empty()).collect()
}

pub(crate) struct IdentifierCache {
    types: Box<[ArcSwapOption<TypeDescriptor>]>,
    members: Box<[ArcSwapOption<MemberDescriptor>]>,
    extras: Box<[ArcSwapOption<MemberDescriptor>]>,
}

impl IdentifierCache {
    pub(crate) fn new(extra_count: usize) -> Self {
        Self {
            types: empty_slots(usize::from(TYPE_ID_MAX)),
            members: empty_slots(usize::from(MEMBER_ID_MAX)),
            extras: empty_slots(extra_count),
        }
    }

    pub(crate) fn published_type(&self, magnitude: u16) -> Option<Arc<TypeDescriptor>> {
        self.types[usize::from(magnitude) - 1].load_full()
    }

    pub(crate) fn publish_type(&self, magnitude: u16, descriptor: Arc<TypeDescriptor>) {
        self.types[usize::from(magnitude) - 1].store(Some(descriptor));
    }

    pub(crate) fn published_member(&self, magnitude: u16) -> Option<Arc<MemberDescriptor>> {
        self.members[usize::from(magnitude) - 1].load_full()
    }

    pub(crate) fn publish_member(&self, magnitude: u16, descriptor: Arc<MemberDescriptor>) {
        self.members[usize::from(magnitude) - 1].store(Some(descriptor));
    }

    pub(crate) fn published_extra(&self, index: usize) -> Option<Arc<MemberDescriptor>> {
        self.extras[index].load_full()
    }

    pub(crate) fn publish_extra(&self, index: usize, descriptor: Arc<MemberDescriptor>) {
        self.extras[index].store(Some(descriptor));
    }

    /// Number of published type slots.
    pub(crate) fn type_count(&self) -> usize {
        self.types.iter().filter(|slot| slot.load().is_some()).count()
    }

    pub(crate) fn member_count(&self) -> usize {
        self.members.iter().filter(|slot| slot.load().is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_checks() {
        assert_eq!(type_index(-1), Ok(1));
        assert_eq!(type_index(-759), Ok(759));
        assert_eq!(type_index(-760), Err(Error::UnknownIdentifier(-760)));
        assert_eq!(type_index(0), Err(Error::InvalidIdentifier(0)));
        assert_eq!(type_index(5), Err(Error::InvalidIdentifier(5)));
        assert_eq!(type_index(i16::MIN), Err(Error::UnknownIdentifier(i16::MIN)));

        assert_eq!(member_index(-270), Ok(270));
        assert_eq!(member_index(-271), Err(Error::UnknownIdentifier(-271)));
        assert_eq!(member_index(1), Err(Error::InvalidIdentifier(1)));
    }

    #[test]
    fn slots_start_empty() {
        let cache = IdentifierCache::new(3);
        assert!(cache.published_type(1).is_none());
        assert!(cache.published_member(270).is_none());
        assert!(cache.published_extra(2).is_none());
        assert_eq!(cache.type_count(), 0);
        assert_eq!(cache.member_count(), 0);
    }
}
