// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Lookup and construction counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Registry counters snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Lookups served from a published descriptor.
    pub hits: u64,
    /// Compact type descriptors constructed.
    pub type_builds: u64,
    /// Compact and extra member descriptors constructed.
    pub member_builds: u64,
    /// Reflected member descriptors constructed.
    pub dynamic_member_builds: u64,
    /// Types answered by an extension resolver.
    pub extension_hits: u64,
    /// Types described by reflective synthesis.
    pub synthesized: u64,
    /// Known-name candidates discarded because the handle differed.
    pub rejected_collisions: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: AtomicU64,
    type_builds: AtomicU64,
    member_builds: AtomicU64,
    dynamic_member_builds: AtomicU64,
    extension_hits: AtomicU64,
    synthesized: AtomicU64,
    rejected_collisions: AtomicU64,
}

impl Counters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_type_build(&self) {
        self.type_builds.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_member_build(&self) {
        self.member_builds.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dynamic_member_build(&self) {
        self.dynamic_member_builds.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_extension_hit(&self) {
        self.extension_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_synthesized(&self) {
        self.synthesized.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected_collision(&self) {
        self.rejected_collisions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> RegistryStats {
        RegistryStats {
            hits: self.hits.load(Ordering::Relaxed),
            type_builds: self.type_builds.load(Ordering::Relaxed),
            member_builds: self.member_builds.load(Ordering::Relaxed),
            dynamic_member_builds: self.dynamic_member_builds.load(Ordering::Relaxed),
            extension_hits: self.extension_hits.load(Ordering::Relaxed),
            synthesized: self.synthesized.load(Ordering::Relaxed),
            rejected_collisions: self.rejected_collisions.load(Ordering::Relaxed),
        }
    }
}
