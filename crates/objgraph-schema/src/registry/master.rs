// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Master type table: runtime handle -> descriptor.
//!
//! Resolution order for a handle not yet in the table:
//!
//! 1. compact type with the same simple name, if it is the same type
//! 2. extension resolvers, in registration order
//! 3. reflective synthesis, for eligible runtime types
//!
//! Whatever wins is published and returned from then on.

use super::Registry;
use crate::config::DYNAMIC_SLOT_BASE;
use crate::descriptor::{
    AccessorKind, CollectionKind, ConverterRef, MemberDescriptor, MemberFlags, TypeDescriptor,
};
use crate::error::{Error, Result, UnsupportedReason};
use crate::known;
use crate::runtime::{positional_factory, RuntimeProperty, TypeHandle};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Key for reflected member lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemberKey {
    owner: TypeHandle,
    name: Box<str>,
    attached: bool,
}

impl MemberKey {
    fn new(owner: &TypeHandle, name: &str, attached: bool) -> Self {
        Self {
            owner: owner.clone(),
            name: Box::from(name),
            attached,
        }
    }
}

#[derive(Default)]
pub(crate) struct MasterTable {
    types: DashMap<TypeHandle, Arc<TypeDescriptor>>,
    /// Simple name -> first descriptor published under it.
    names: DashMap<Box<str>, Arc<TypeDescriptor>>,
    members: DashMap<MemberKey, Arc<MemberDescriptor>>,
    next_slot: AtomicU32,
}

impl MasterTable {
    fn get(&self, handle: &TypeHandle) -> Option<Arc<TypeDescriptor>> {
        self.types.get(handle).map(|entry| Arc::clone(entry.value()))
    }

    /// Insert unless present; returns the descriptor now in the table.
    pub(crate) fn publish(&self, descriptor: Arc<TypeDescriptor>) -> Arc<TypeDescriptor> {
        let published = Arc::clone(
            self.types
                .entry(descriptor.handle().clone())
                .or_insert(descriptor)
                .value(),
        );
        self.names
            .entry(Box::from(published.name()))
            .or_insert_with(|| Arc::clone(&published));
        published
    }

    /// Descriptor published under simple name `name`, if any.
    pub(crate) fn by_name(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.names.get(name).map(|entry| Arc::clone(entry.value()))
    }

    pub(crate) fn len(&self) -> usize {
        self.types.len()
    }

    fn member(&self, key: &MemberKey) -> Option<Arc<MemberDescriptor>> {
        self.members.get(key).map(|entry| Arc::clone(entry.value()))
    }

    fn publish_member(&self, key: MemberKey, member: Arc<MemberDescriptor>) -> Arc<MemberDescriptor> {
        let entry = self.members.entry(key).or_insert(member);
        Arc::clone(entry.value())
    }

    fn next_dynamic_slot(&self) -> u32 {
        DYNAMIC_SLOT_BASE + self.next_slot.fetch_add(1, Ordering::Relaxed)
    }
}

impl Registry {
    /// Descriptor for a runtime type, creating it on first request.
    ///
    /// Every call for the same type returns the same `Arc`. Refusals
    /// ([`Error::UnsupportedType`]) are not cached.
    pub fn get_or_create(&self, handle: &TypeHandle) -> Result<Arc<TypeDescriptor>> {
        if let Some(hit) = self.master.get(handle) {
            self.counters.record_hit();
            return Ok(hit);
        }

        let _guard = self.state.lock();
        if let Some(hit) = self.master.get(handle) {
            self.counters.record_hit();
            return Ok(hit);
        }

        if let Some(magnitude) = known::type_id(handle.name()) {
            let candidate = self.known_type_locked(magnitude);
            if candidate.handle() == handle {
                return Ok(candidate);
            }
            self.counters.record_rejected_collision();
            log::debug!(
                "[registry] {} ({}) shares a name with known {} ({}), ignoring",
                handle,
                handle.module(),
                candidate.handle(),
                candidate.handle().module()
            );
        }

        if let Some(found) = self.extensions.resolve_handle(handle) {
            self.counters.record_extension_hit();
            return Ok(self.master.publish(found));
        }

        if !self.config.synthesis_allowed() {
            return Err(unsupported(handle, UnsupportedReason::SynthesisDisabled));
        }
        require_runtime_type(handle)?;

        let built = self.master.publish(Arc::new(synthesize(handle)));
        self.counters.record_synthesized();
        log::debug!("[registry] synthesized {} from {}", handle, handle.module());
        Ok(built)
    }

    /// Alias of [`get_or_create`](Self::get_or_create).
    pub fn describe(&self, handle: &TypeHandle) -> Result<Arc<TypeDescriptor>> {
        self.get_or_create(handle)
    }

    /// `true` if `handle` already has a published descriptor.
    pub fn is_known(&self, handle: &TypeHandle) -> bool {
        self.master.types.contains_key(handle)
    }

    /// Instance member `name` of `owner`, reflected if `owner` is dynamic.
    pub fn describe_member(
        &self,
        owner: &Arc<TypeDescriptor>,
        name: &str,
    ) -> Result<Arc<MemberDescriptor>> {
        self.describe_member_in(owner, name, false)
    }

    /// Attached member `name` of `owner`, reflected if `owner` is dynamic.
    pub fn describe_attached_member(
        &self,
        owner: &Arc<TypeDescriptor>,
        name: &str,
    ) -> Result<Arc<MemberDescriptor>> {
        self.describe_member_in(owner, name, true)
    }

    fn describe_member_in(
        &self,
        owner: &Arc<TypeDescriptor>,
        name: &str,
        attached: bool,
    ) -> Result<Arc<MemberDescriptor>> {
        let not_found = || Error::NameNotFound(format!("{}.{}", owner.name(), name));

        if owner.is_known() {
            return self
                .route_member(owner.name(), name, attached)
                .ok_or_else(not_found);
        }

        let key = MemberKey::new(owner.handle(), name, attached);
        if let Some(hit) = self.master.member(&key) {
            self.counters.record_hit();
            return Ok(hit);
        }

        let _guard = self.state.lock();
        if let Some(hit) = self.master.member(&key) {
            return Ok(hit);
        }
        // Members always point at the published owner.
        let owner = &self.get_or_create(owner.handle())?;

        let mut found = None;
        for ancestor in owner.handle().ancestry() {
            if is_compact_handle(ancestor) {
                found = self.route_member(ancestor.name(), name, attached);
                break;
            }
            let Some(property) = ancestor
                .runtime()
                .property(name)
                .filter(|p| p.attachable == attached)
            else {
                continue;
            };
            if ancestor == owner.handle() {
                found = Some(self.reflect_member(owner, property));
            } else {
                // Declared on a base: share the base's descriptor.
                found = Some(match self.get_or_create(ancestor) {
                    Ok(declaring) => self.describe_member_in(&declaring, name, attached)?,
                    Err(_) => self.reflect_member(owner, property),
                });
            }
            break;
        }

        let member = found.ok_or_else(not_found)?;
        Ok(self.master.publish_member(key, member))
    }

    fn reflect_member(
        &self,
        owner: &Arc<TypeDescriptor>,
        property: &RuntimeProperty,
    ) -> Arc<MemberDescriptor> {
        let mut flags = MemberFlags::empty();
        if !property.writable {
            flags = flags | MemberFlags::READ_ONLY;
        }
        if property.attachable {
            flags = flags | MemberFlags::ATTACHABLE;
        }
        let accessor = match property.accessors {
            Some((get, set)) => AccessorKind::Indirect { get, set },
            None => AccessorKind::Field {
                slot: self.master.next_dynamic_slot(),
            },
        };
        let member = MemberDescriptor::new(
            0,
            Arc::clone(owner),
            Arc::clone(&property.name),
            property.value_type.clone(),
            flags,
            None,
            accessor,
        );
        self.counters.record_dynamic_member_build();
        log::trace!("[registry] reflected member {}", member.qualified_name());
        Arc::new(member)
    }
}

// ============================================================================
// Synthesis
// ============================================================================

fn unsupported(handle: &TypeHandle, reason: UnsupportedReason) -> Error {
    log::debug!("[registry] refusing {}: {}", handle, reason);
    Error::UnsupportedType {
        name: handle.full_name(),
        reason,
    }
}

/// Eligibility check for reflective synthesis.
pub(crate) fn require_runtime_type(handle: &TypeHandle) -> Result<()> {
    let runtime = handle.runtime();
    let reason = if runtime.is_schema_type() {
        UnsupportedReason::SchemaType
    } else if runtime.is_open_generic() {
        UnsupportedReason::OpenGeneric
    } else if !runtime.is_public() {
        UnsupportedReason::NotPublic
    } else if !runtime.is_abstract()
        && !runtime.has_default_constructor()
        && runtime.constructors().is_empty()
    {
        UnsupportedReason::NoConstructor
    } else {
        return Ok(());
    };
    Err(unsupported(handle, reason))
}

/// `handle` is the runtime handle of a compact type.
fn is_compact_handle(handle: &TypeHandle) -> bool {
    known::type_id(handle.name()).is_some_and(|magnitude| &known::handle(magnitude) == handle)
}

/// Describe an eligible runtime type from its reflection metadata.
///
/// Content and dictionary-key properties, converters and collection
/// behavior are inherited from the nearest base that declares them.
fn synthesize(handle: &TypeHandle) -> TypeDescriptor {
    let runtime = handle.runtime();
    let mut builder = TypeDescriptor::builder(handle.clone())
        .synthesized()
        .usable_before_init(handle.ancestry().any(|h| h.runtime().usable_before_init()));

    if let Some(kind) = handle
        .ancestry()
        .map(|h| h.runtime().collection())
        .find(|kind| *kind != CollectionKind::None)
    {
        builder = builder.collection(kind);
    }
    if let Some(content) = handle.ancestry().find_map(|h| h.runtime().content_property()) {
        builder = builder.content_property(content);
    }
    if let Some(key) = handle
        .ancestry()
        .find_map(|h| h.runtime().dictionary_key_property())
    {
        builder = builder.dictionary_key_property(key);
    }
    if let Some(converter) = handle.ancestry().find_map(|h| h.runtime().converter()) {
        let converter = match known::type_id(converter) {
            Some(magnitude) => ConverterRef::Known(magnitude),
            None => ConverterRef::Named(Arc::clone(converter)),
        };
        builder = builder.converter(converter);
    }

    if !runtime.is_abstract() {
        if runtime.has_default_constructor() {
            builder = builder.default_constructor();
        }
        for constructor in runtime.constructors() {
            builder = builder.constructor(
                constructor.arguments.clone(),
                constructor.factory.unwrap_or(positional_factory),
            );
        }
    }
    builder.build()
}
