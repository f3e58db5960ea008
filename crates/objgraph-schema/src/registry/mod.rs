// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema registry.
//!
//! Resolves wire ids, runtime type handles and `(owner, member)` names to
//! immutable descriptors, building each descriptor at most once.
//!
//! # Concurrency
//!
//! Published descriptors are read without locking: id slots are
//! [`ArcSwapOption`](arc_swap::ArcSwapOption)s and the master table is a
//! [`DashMap`](dashmap::DashMap). Every miss takes one registry-wide
//! reentrant lock, re-checks, constructs and publishes. Two threads asking
//! for the same missing entry therefore observe the same `Arc`, and the
//! construction runs once. Extension resolvers run under that lock and may
//! call back into the registry.

mod extension;
mod ids;
mod master;
mod stats;

#[cfg(test)]
mod tests;

pub use extension::{StaticTypeResolver, TypeResolver};
pub use stats::RegistryStats;

use crate::assembly::{AssemblyId, AssemblyTable, ModuleHandle, ModuleLoader, StaticModuleLoader};
use crate::config::{RegistryConfig, MEMBER_ID_MAX, TYPE_ID_MAX};
use crate::descriptor::{ConverterRef, MemberDescriptor, TypeDescriptor};
use crate::error::{Error, Result};
use crate::known::{self, MemberRoute, EXTRA_MEMBERS};
use extension::ExtensionChain;
use ids::IdentifierCache;
use master::MasterTable;
use parking_lot::ReentrantMutex;
use stats::Counters;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// The schema registry.
///
/// # Example
///
/// ```
/// use objgraph_schema::Registry;
///
/// let registry = Registry::builder().build();
/// let button = registry.get_type(-63).unwrap();
/// assert_eq!(button.name(), "Button");
///
/// let content = registry.resolve_member("Button", "Content").unwrap();
/// assert_eq!(content.owner().name(), "ContentControl");
/// ```
pub struct Registry {
    config: RegistryConfig,
    /// Serializes every construction and publication.
    state: ReentrantMutex<()>,
    ids: IdentifierCache,
    master: MasterTable,
    extensions: ExtensionChain,
    assemblies: AssemblyTable,
    counters: Counters,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Process-wide registry with default configuration.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(|| Registry::builder().build())
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Counters snapshot.
    pub fn stats(&self) -> RegistryStats {
        self.counters.snapshot()
    }

    // ------------------------------------------------------------------
    // Identifier lookups
    // ------------------------------------------------------------------

    /// Type descriptor for a negative wire id.
    ///
    /// Non-negative ids are a caller bug ([`Error::InvalidIdentifier`]);
    /// magnitudes past the table are a corrupt stream
    /// ([`Error::UnknownIdentifier`]).
    pub fn get_type(&self, id: i16) -> Result<Arc<TypeDescriptor>> {
        let magnitude = ids::type_index(id)?;
        Ok(self.type_by_magnitude(magnitude))
    }

    /// Member descriptor for a negative wire id.
    pub fn get_member(&self, id: i16) -> Result<Arc<MemberDescriptor>> {
        let magnitude = ids::member_index(id)?;
        Ok(self.member_by_magnitude(magnitude))
    }

    fn type_by_magnitude(&self, magnitude: u16) -> Arc<TypeDescriptor> {
        if let Some(hit) = self.ids.published_type(magnitude) {
            self.counters.record_hit();
            return hit;
        }
        let _guard = self.state.lock();
        self.known_type_locked(magnitude)
    }

    fn member_by_magnitude(&self, magnitude: u16) -> Arc<MemberDescriptor> {
        if let Some(hit) = self.ids.published_member(magnitude) {
            self.counters.record_hit();
            return hit;
        }
        let _guard = self.state.lock();
        if let Some(hit) = self.ids.published_member(magnitude) {
            return hit;
        }
        let owner = self.known_type_locked(known::known_member(magnitude).owner);
        let built = Arc::new(known::build_member(magnitude, owner));
        log::trace!("[registry] built member {} (-{})", built.qualified_name(), magnitude);
        self.ids.publish_member(magnitude, Arc::clone(&built));
        self.counters.record_member_build();
        built
    }

    fn extra_member(&self, index: usize) -> Arc<MemberDescriptor> {
        if let Some(hit) = self.ids.published_extra(index) {
            self.counters.record_hit();
            return hit;
        }
        let _guard = self.state.lock();
        if let Some(hit) = self.ids.published_extra(index) {
            return hit;
        }
        let owner = self.known_type_locked(EXTRA_MEMBERS[index].owner);
        let built = Arc::new(known::build_extra_member(index, owner));
        log::trace!("[registry] built extra member {}", built.qualified_name());
        self.ids.publish_extra(index, Arc::clone(&built));
        self.counters.record_member_build();
        built
    }

    /// Build and publish a compact type; caller holds the lock.
    fn known_type_locked(&self, magnitude: u16) -> Arc<TypeDescriptor> {
        if let Some(hit) = self.ids.published_type(magnitude) {
            return hit;
        }
        let built = self.master.publish(Arc::new(known::build_type(magnitude)));
        log::trace!("[registry] built type {} (-{})", built.name(), magnitude);
        self.ids.publish_type(magnitude, Arc::clone(&built));
        self.counters.record_type_build();
        built
    }

    // ------------------------------------------------------------------
    // Name lookups
    // ------------------------------------------------------------------

    /// Instance member `member` of `owner` or of one of its base types.
    ///
    /// Attached members are not visible here; see
    /// [`resolve_attached_member`](Self::resolve_attached_member).
    pub fn resolve_member(&self, owner: &str, member: &str) -> Option<Arc<MemberDescriptor>> {
        self.route_member(owner, member, false)
    }

    /// Attached member `member` declared by `owner` or one of its bases.
    pub fn resolve_attached_member(
        &self,
        owner: &str,
        member: &str,
    ) -> Option<Arc<MemberDescriptor>> {
        self.route_member(owner, member, true)
    }

    fn route_member(&self, owner: &str, member: &str, attached: bool) -> Option<Arc<MemberDescriptor>> {
        match known::member_route(owner, member, attached)? {
            MemberRoute::Known(magnitude) => Some(self.member_by_magnitude(magnitude)),
            MemberRoute::Extra(index) => Some(self.extra_member(index)),
        }
    }

    /// Type descriptor by simple name.
    ///
    /// Compact types first, then every descriptor already published; then,
    /// if enabled, the extension chain.
    pub fn resolve_type_name(&self, name: &str) -> Result<Arc<TypeDescriptor>> {
        if let Some(magnitude) = known::type_id(name) {
            return Ok(self.type_by_magnitude(magnitude));
        }
        if let Some(hit) = self.master.by_name(name) {
            self.counters.record_hit();
            return Ok(hit);
        }
        if self.config.extension_name_fallback {
            let _guard = self.state.lock();
            if let Some(hit) = self.master.by_name(name) {
                return Ok(hit);
            }
            if let Some(found) = self.extensions.resolve_name(name) {
                self.counters.record_extension_hit();
                return Ok(self.master.publish(found));
            }
        }
        Err(Error::NameNotFound(name.to_string()))
    }

    /// Descriptor of the converter type `converter` refers to.
    pub fn converter_type(&self, converter: &ConverterRef) -> Result<Arc<TypeDescriptor>> {
        match converter {
            ConverterRef::Known(magnitude) if (1..=TYPE_ID_MAX).contains(magnitude) => {
                Ok(self.type_by_magnitude(*magnitude))
            }
            ConverterRef::Known(magnitude) => {
                // Not expressible as a negative wire id: report the sentinel.
                let wire = i16::try_from(-i32::from(*magnitude))
                    .ok()
                    .filter(|id| *id < 0)
                    .unwrap_or(i16::MIN);
                Err(Error::UnknownIdentifier(wire))
            }
            ConverterRef::Named(name) => self.resolve_type_name(name),
        }
    }

    // ------------------------------------------------------------------
    // Assemblies
    // ------------------------------------------------------------------

    /// Bound module for an assembly reference.
    ///
    /// A failed bind is reported and retried on the next call.
    pub fn module(&self, id: AssemblyId) -> Result<Arc<ModuleHandle>> {
        if let Some(module) = self.assemblies.published(id) {
            return Ok(module);
        }
        let _guard = self.state.lock();
        self.assemblies.bind_locked(id)
    }

    /// Bound module a compact descriptor belongs to; `None` for dynamic types.
    pub fn module_of(&self, descriptor: &TypeDescriptor) -> Result<Option<Arc<ModuleHandle>>> {
        descriptor.assembly().map(|id| self.module(id)).transpose()
    }

    // ------------------------------------------------------------------
    // Extensions
    // ------------------------------------------------------------------

    /// Append a resolver to the extension chain.
    pub fn register_extension(&self, resolver: Arc<dyn TypeResolver>) {
        let _guard = self.state.lock();
        self.extensions.push(resolver);
    }

    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }

    // ------------------------------------------------------------------
    // Population
    // ------------------------------------------------------------------

    /// Number of compact type slots published so far.
    pub fn published_types(&self) -> usize {
        self.ids.type_count()
    }

    /// Number of compact member slots published so far.
    pub fn published_members(&self) -> usize {
        self.ids.member_count()
    }

    fn populate(&self) {
        if self.config.eager_known_types {
            for magnitude in 1..=TYPE_ID_MAX {
                self.type_by_magnitude(magnitude);
            }
        }
        if self.config.eager_known_members {
            for magnitude in 1..=MEMBER_ID_MAX {
                self.member_by_magnitude(magnitude);
            }
        }
        if self.config.eager_known_types || self.config.eager_known_members {
            log::info!(
                "[registry] eager population: {} types, {} members",
                self.published_types(),
                self.published_members()
            );
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("published_types", &self.published_types())
            .field("published_members", &self.published_members())
            .field("described_types", &self.master.len())
            .field("extensions", &self.extensions.len())
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    loader: Option<Arc<dyn ModuleLoader>>,
    extensions: Vec<Arc<dyn TypeResolver>>,
}

impl RegistryBuilder {
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default [`StaticModuleLoader`].
    pub fn module_loader(mut self, loader: Arc<dyn ModuleLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Append an extension resolver.
    pub fn extension(mut self, resolver: Arc<dyn TypeResolver>) -> Self {
        self.extensions.push(resolver);
        self
    }

    pub fn build(self) -> Registry {
        let loader = self
            .loader
            .unwrap_or_else(|| Arc::new(StaticModuleLoader));
        let registry = Registry {
            config: self.config,
            state: ReentrantMutex::new(()),
            ids: IdentifierCache::new(EXTRA_MEMBERS.len()),
            master: MasterTable::default(),
            extensions: ExtensionChain::default(),
            assemblies: AssemblyTable::new(loader),
            counters: Counters::default(),
        };
        for resolver in self.extensions {
            registry.extensions.push(resolver);
        }
        registry.populate();
        registry
    }
}
