// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compact well-known tables.
//!
//! Every type and member the binary format can reference by wire id is
//! listed here as a `const` record. Records are turned into descriptors on
//! first use by the registry; nothing in this module is mutable except the
//! process-wide cache of runtime handles.
//!
//! Table order is significant: a record at index `i` has wire id `-(i + 1)`.
//! Both tables are sorted by name (members by owner, then name), which
//! keeps every owner's declared members contiguous.

mod members;
mod names;
mod types;

#[cfg(test)]
mod tests;

pub(crate) use members::{EXTRA_MEMBERS, KNOWN_MEMBERS};
pub(crate) use names::{member_route, type_id, MemberRoute};
pub(crate) use types::KNOWN_TYPES;

use crate::assembly::AssemblyId;
use crate::config::{MEMBER_ID_MAX, TYPE_ID_MAX};
use crate::descriptor::{
    AccessorKind, CollectionKind, ConverterRef, DefaultValueFn, MemberDescriptor, MemberFlags,
    TypeDescriptor,
};
use crate::runtime::{RuntimeType, TypeHandle, Value};
use std::sync::{Arc, OnceLock};

// ============================================================================
// Type records
// ============================================================================

/// Default value a compact type produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KnownDefault {
    None,
    False,
    Zero,
    ZeroFloat,
    Null,
}

impl KnownDefault {
    fn producer(self) -> Option<DefaultValueFn> {
        match self {
            KnownDefault::None => None,
            KnownDefault::False => Some(default_false),
            KnownDefault::Zero => Some(default_zero),
            KnownDefault::ZeroFloat => Some(default_zero_float),
            KnownDefault::Null => Some(default_null),
        }
    }
}

fn default_false() -> Value {
    Value::Bool(false)
}

fn default_zero() -> Value {
    Value::Int(0)
}

fn default_zero_float() -> Value {
    Value::Float(0.0)
}

fn default_null() -> Value {
    Value::Null
}

const TYPE_ABSTRACT: u8 = 1 << 0;
const TYPE_NO_DEFAULT_CTOR: u8 = 1 << 1;
const TYPE_USABLE_BEFORE_INIT: u8 = 1 << 2;

/// One row of the compact type table.
#[derive(Debug)]
pub(crate) struct KnownType {
    pub(crate) name: &'static str,
    pub(crate) namespace: &'static str,
    pub(crate) assembly: AssemblyId,
    /// Base type id magnitude, 0 for the root.
    pub(crate) base: u16,
    flags: u8,
    pub(crate) collection: CollectionKind,
    pub(crate) content: Option<&'static str>,
    pub(crate) dictionary_key: Option<&'static str>,
    /// Converter type id magnitude, 0 for none.
    pub(crate) converter: u16,
    pub(crate) default_value: KnownDefault,
    /// Positional constructor overloads, as argument type ids.
    pub(crate) constructors: &'static [&'static [u16]],
}

const fn t(name: &'static str, namespace: &'static str, assembly: AssemblyId, base: u16) -> KnownType {
    KnownType {
        name,
        namespace,
        assembly,
        base,
        flags: 0,
        collection: CollectionKind::None,
        content: None,
        dictionary_key: None,
        converter: 0,
        default_value: KnownDefault::None,
        constructors: &[],
    }
}

impl KnownType {
    const fn abstract_type(mut self) -> Self {
        self.flags |= TYPE_ABSTRACT;
        self
    }

    const fn no_default_constructor(mut self) -> Self {
        self.flags |= TYPE_NO_DEFAULT_CTOR;
        self
    }

    const fn usable_before_init(mut self) -> Self {
        self.flags |= TYPE_USABLE_BEFORE_INIT;
        self
    }

    const fn content(mut self, property: &'static str) -> Self {
        self.content = Some(property);
        self
    }

    const fn dictionary_key(mut self, property: &'static str) -> Self {
        self.dictionary_key = Some(property);
        self
    }

    const fn converter(mut self, id: u16) -> Self {
        self.converter = id;
        self
    }

    const fn sequence(mut self) -> Self {
        self.collection = CollectionKind::Sequence;
        self
    }

    const fn dictionary(mut self) -> Self {
        self.collection = CollectionKind::Dictionary;
        self
    }

    const fn default_value(mut self, value: KnownDefault) -> Self {
        self.default_value = value;
        self
    }

    const fn constructors(mut self, overloads: &'static [&'static [u16]]) -> Self {
        self.constructors = overloads;
        self
    }

    pub(crate) fn is_abstract(&self) -> bool {
        self.flags & TYPE_ABSTRACT != 0
    }

    pub(crate) fn has_default_constructor(&self) -> bool {
        self.flags & TYPE_NO_DEFAULT_CTOR == 0
    }

    pub(crate) fn is_usable_before_init(&self) -> bool {
        self.flags & TYPE_USABLE_BEFORE_INIT != 0
    }
}

// ============================================================================
// Member records
// ============================================================================

/// One row of the compact member table (or of the extra-member list).
#[derive(Debug)]
pub(crate) struct KnownMember {
    /// Owner type id magnitude.
    pub(crate) owner: u16,
    pub(crate) name: &'static str,
    /// Value type id magnitude.
    pub(crate) value_type: u16,
    pub(crate) flags: MemberFlags,
    /// Member-level converter type id magnitude, 0 for none.
    pub(crate) converter: u16,
    pub(crate) unsupported_accessor: bool,
}

const fn m(owner: u16, name: &'static str, value_type: u16) -> KnownMember {
    KnownMember {
        owner,
        name,
        value_type,
        flags: MemberFlags::empty(),
        converter: 0,
        unsupported_accessor: false,
    }
}

impl KnownMember {
    const fn read_only(mut self) -> Self {
        self.flags = self.flags.union(MemberFlags::READ_ONLY);
        self
    }

    const fn attachable(mut self) -> Self {
        self.flags = self.flags.union(MemberFlags::ATTACHABLE);
        self
    }

    const fn privileged_write(mut self) -> Self {
        self.flags = self.flags.union(MemberFlags::PRIVILEGED_WRITE);
        self
    }

    const fn ambient(mut self) -> Self {
        self.flags = self.flags.union(MemberFlags::AMBIENT);
        self
    }

    const fn deferred_loader(mut self) -> Self {
        self.flags = self.flags.union(MemberFlags::DEFERRED_LOADER);
        self
    }

    const fn unsupported_accessor(mut self) -> Self {
        self.unsupported_accessor = true;
        self
    }

    const fn converter(mut self, id: u16) -> Self {
        self.converter = id;
        self
    }

    pub(crate) fn is_attachable(&self) -> bool {
        self.flags.contains(MemberFlags::ATTACHABLE)
    }
}

// ============================================================================
// Runtime handles
// ============================================================================

static HANDLES: [OnceLock<TypeHandle>; TYPE_ID_MAX as usize] =
    [const { OnceLock::new() }; TYPE_ID_MAX as usize];

/// Record for type id magnitude `id` (`1..=TYPE_ID_MAX`).
pub(crate) fn known_type(id: u16) -> &'static KnownType {
    &KNOWN_TYPES[usize::from(id) - 1]
}

/// Record for member id magnitude `id` (`1..=MEMBER_ID_MAX`).
pub(crate) fn known_member(id: u16) -> &'static KnownMember {
    &KNOWN_MEMBERS[usize::from(id) - 1]
}

/// Runtime handle of a compact type, shared process-wide.
pub(crate) fn handle(id: u16) -> TypeHandle {
    HANDLES[usize::from(id) - 1]
        .get_or_init(|| build_handle(id))
        .clone()
}

// Constructor argument types are left to the descriptor; resolving them
// here could recurse into a cell that is still initializing.
fn build_handle(id: u16) -> TypeHandle {
    let record = known_type(id);
    let mut builder =
        RuntimeType::builder(record.assembly.module_name(), record.namespace, record.name)
            .collection(record.collection);
    if record.base != 0 {
        builder = builder.base(handle(record.base));
    }
    if record.is_abstract() {
        builder = builder.abstract_type();
    }
    if !record.has_default_constructor() {
        builder = builder.no_default_constructor();
    }
    if record.is_usable_before_init() {
        builder = builder.usable_before_init();
    }
    if let Some(content) = record.content {
        builder = builder.content_property(content);
    }
    if let Some(key) = record.dictionary_key {
        builder = builder.dictionary_key_property(key);
    }
    if record.converter != 0 {
        builder = builder.converter(known_type(record.converter).name);
    }
    builder.build()
}

// ============================================================================
// Descriptor construction
// ============================================================================

/// Build the descriptor for type id magnitude `id`.
pub(crate) fn build_type(id: u16) -> TypeDescriptor {
    let record = known_type(id);
    let mut builder = TypeDescriptor::builder(handle(id))
        .known(id, record.assembly)
        .collection(record.collection)
        .usable_before_init(record.is_usable_before_init());

    if let Some(produce) = record.default_value.producer() {
        builder = builder.default_value(produce);
    }
    if record.converter != 0 {
        builder = builder.converter(ConverterRef::Known(record.converter));
    }
    if let Some(content) = record.content {
        builder = builder.content_property(content);
    }
    if let Some(key) = record.dictionary_key {
        builder = builder.dictionary_key_property(key);
    }
    if !record.is_abstract() && record.has_default_constructor() {
        builder = builder.default_constructor();
    }
    for arguments in record.constructors {
        builder = builder.positional_constructor(arguments.iter().map(|&a| handle(a)).collect());
    }
    builder.build()
}

/// Build the descriptor for member id magnitude `id`.
pub(crate) fn build_member(id: u16, owner: Arc<TypeDescriptor>) -> MemberDescriptor {
    member_from_record(id, known_member(id), u32::from(id), owner)
}

/// Build the descriptor for extra member `index`. Extras carry wire id 0.
pub(crate) fn build_extra_member(index: usize, owner: Arc<TypeDescriptor>) -> MemberDescriptor {
    let slot = u32::from(MEMBER_ID_MAX) + 1 + index as u32;
    member_from_record(0, &EXTRA_MEMBERS[index], slot, owner)
}

fn member_from_record(
    id: u16,
    record: &KnownMember,
    slot: u32,
    owner: Arc<TypeDescriptor>,
) -> MemberDescriptor {
    let accessor = if record.unsupported_accessor {
        AccessorKind::Unsupported
    } else {
        AccessorKind::Field { slot }
    };
    let converter = (record.converter != 0).then_some(ConverterRef::Known(record.converter));
    MemberDescriptor::new(
        id,
        owner,
        Arc::from(record.name),
        handle(record.value_type),
        record.flags,
        converter,
        accessor,
    )
}
