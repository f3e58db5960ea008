// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Immutable member descriptors.

use super::accessor::{read_member, write_member};
use super::{AccessorKind, ConverterRef, TypeDescriptor, WriteOrigin};
use crate::error::Result;
use crate::runtime::{Instance, TypeHandle, Value};
use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

/// Member behavior flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MemberFlags(pub u8);

impl MemberFlags {
    pub const READ_ONLY: Self = Self(1 << 0);
    pub const ATTACHABLE: Self = Self(1 << 1);
    /// Writable only by the deserializer.
    pub const PRIVILEGED_WRITE: Self = Self(1 << 2);
    /// Value is inherited through the element tree.
    pub const AMBIENT: Self = Self(1 << 3);
    /// Content is loaded on demand by a deferred loader.
    pub const DEFERRED_LOADER: Self = Self(1 << 4);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for MemberFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for MemberFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(MemberFlags, &str); 5] = [
            (MemberFlags::READ_ONLY, "READ_ONLY"),
            (MemberFlags::ATTACHABLE, "ATTACHABLE"),
            (MemberFlags::PRIVILEGED_WRITE, "PRIVILEGED_WRITE"),
            (MemberFlags::AMBIENT, "AMBIENT"),
            (MemberFlags::DEFERRED_LOADER, "DEFERRED_LOADER"),
        ];
        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "MemberFlags({})", set.join(" | "))
    }
}

/// Immutable description of one member (property or attached property).
pub struct MemberDescriptor {
    /// Wire id magnitude, 0 for dynamic members.
    id: u16,
    owner: Arc<TypeDescriptor>,
    name: Arc<str>,
    value_type: TypeHandle,
    flags: MemberFlags,
    converter: Option<ConverterRef>,
    accessor: AccessorKind,
}

impl MemberDescriptor {
    pub(crate) fn new(
        id: u16,
        owner: Arc<TypeDescriptor>,
        name: Arc<str>,
        value_type: TypeHandle,
        flags: MemberFlags,
        converter: Option<ConverterRef>,
        accessor: AccessorKind,
    ) -> Self {
        Self {
            id,
            owner,
            name,
            value_type,
            flags,
            converter,
            accessor,
        }
    }

    /// Wire id magnitude; 0 for dynamic members.
    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn wire_id(&self) -> Option<i16> {
        (self.id != 0).then(|| -(self.id as i16))
    }

    /// Declaring type.
    pub fn owner(&self) -> &Arc<TypeDescriptor> {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Owner.Name`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.owner.name(), self.name)
    }

    pub fn value_type(&self) -> &TypeHandle {
        &self.value_type
    }

    pub fn flags(&self) -> MemberFlags {
        self.flags
    }

    pub fn is_read_only(&self) -> bool {
        self.flags.contains(MemberFlags::READ_ONLY)
    }

    pub fn is_attachable(&self) -> bool {
        self.flags.contains(MemberFlags::ATTACHABLE)
    }

    pub fn is_write_privileged(&self) -> bool {
        self.flags.contains(MemberFlags::PRIVILEGED_WRITE)
    }

    pub fn is_ambient(&self) -> bool {
        self.flags.contains(MemberFlags::AMBIENT)
    }

    pub fn has_deferred_loader(&self) -> bool {
        self.flags.contains(MemberFlags::DEFERRED_LOADER)
    }

    /// Member-level converter; overrides the value type's converter.
    pub fn converter(&self) -> Option<&ConverterRef> {
        self.converter.as_ref()
    }

    pub fn accessor(&self) -> AccessorKind {
        self.accessor
    }

    /// Read this member from `target`. Unset slots read as `Null`.
    pub fn read(&self, target: &dyn Instance) -> Result<Value> {
        read_member(self, target)
    }

    /// Write `value` into `target`.
    ///
    /// Fails on read-only members, on privileged members written from
    /// [`WriteOrigin::Code`], on unsupported accessors, and on object
    /// values not assignable to [`value_type`](Self::value_type).
    pub fn write(&self, target: &mut dyn Instance, value: Value, origin: WriteOrigin) -> Result<()> {
        write_member(self, target, value, origin)
    }
}

impl fmt::Debug for MemberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("id", &self.id)
            .field("name", &self.qualified_name())
            .field("value_type", &self.value_type)
            .field("flags", &self.flags)
            .field("accessor", &self.accessor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::runtime::{PropertyBag, RuntimeType};

    fn owner() -> Arc<TypeDescriptor> {
        let handle = RuntimeType::builder("App", "App", "Gauge").build();
        Arc::new(TypeDescriptor::builder(handle).default_constructor().build())
    }

    fn double() -> TypeHandle {
        RuntimeType::builder("System.Runtime", "System", "Double").build()
    }

    fn member(flags: MemberFlags, accessor: AccessorKind) -> MemberDescriptor {
        MemberDescriptor::new(0, owner(), Arc::from("Level"), double(), flags, None, accessor)
    }

    fn bag() -> PropertyBag {
        PropertyBag::new(RuntimeType::builder("App", "App", "Gauge").build())
    }

    fn get_level(target: &dyn Instance) -> Result<Value> {
        Ok(target.field(7).unwrap_or(Value::Float(0.5)))
    }

    fn set_level(target: &mut dyn Instance, value: Value) -> Result<()> {
        target.set_field(7, value);
        Ok(())
    }

    #[test]
    fn flags_compose() {
        let flags = MemberFlags::READ_ONLY | MemberFlags::ATTACHABLE;
        assert!(flags.contains(MemberFlags::READ_ONLY));
        assert!(flags.contains(MemberFlags::ATTACHABLE));
        assert!(!flags.contains(MemberFlags::AMBIENT));
        assert_eq!(format!("{:?}", flags), "MemberFlags(READ_ONLY | ATTACHABLE)");
    }

    #[test]
    fn field_accessor_round_trips_through_slot() {
        let level = member(MemberFlags::empty(), AccessorKind::Field { slot: 42 });
        let mut target = bag();

        assert_eq!(level.read(&target).expect("read"), Value::Null);
        level
            .write(&mut target, Value::Float(0.75), WriteOrigin::Code)
            .expect("write");
        assert_eq!(level.read(&target).expect("read"), Value::Float(0.75));
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn indirect_accessor_uses_functions() {
        let level = member(
            MemberFlags::empty(),
            AccessorKind::Indirect {
                get: get_level,
                set: Some(set_level),
            },
        );
        let mut target = bag();
        assert_eq!(level.read(&target).expect("read"), Value::Float(0.5));
        level
            .write(&mut target, Value::Float(0.25), WriteOrigin::Code)
            .expect("write");
        assert_eq!(level.read(&target).expect("read"), Value::Float(0.25));
    }

    #[test]
    fn read_only_refuses_writes() {
        let level = member(MemberFlags::READ_ONLY, AccessorKind::Field { slot: 1 });
        let err = level
            .write(&mut bag(), Value::Float(1.0), WriteOrigin::Deserializer)
            .unwrap_err();
        assert_eq!(err, Error::ReadOnlyMember("Gauge.Level".into()));

        let getter_only = member(
            MemberFlags::empty(),
            AccessorKind::Indirect {
                get: get_level,
                set: None,
            },
        );
        assert!(matches!(
            getter_only.write(&mut bag(), Value::Null, WriteOrigin::Code),
            Err(Error::ReadOnlyMember(_))
        ));
    }

    #[test]
    fn privileged_write_only_from_deserializer() {
        let level = member(MemberFlags::PRIVILEGED_WRITE, AccessorKind::Field { slot: 3 });
        let mut target = bag();
        assert_eq!(
            level.write(&mut target, Value::Float(1.0), WriteOrigin::Code),
            Err(Error::PrivilegedWrite("Gauge.Level".into()))
        );
        level
            .write(&mut target, Value::Float(1.0), WriteOrigin::Deserializer)
            .expect("deserializer write");
    }

    #[test]
    fn unsupported_accessor_fails_both_ways() {
        let level = member(MemberFlags::empty(), AccessorKind::Unsupported);
        assert!(matches!(level.read(&bag()), Err(Error::AccessorUnsupported(_))));
        assert!(matches!(
            level.write(&mut bag(), Value::Null, WriteOrigin::Deserializer),
            Err(Error::AccessorUnsupported(_))
        ));
    }

    #[test]
    fn object_values_must_be_assignable() {
        let level = member(MemberFlags::empty(), AccessorKind::Field { slot: 9 });
        let stranger: Arc<dyn Instance> = Arc::new(bag());
        let err = level
            .write(&mut bag(), Value::Object(stranger), WriteOrigin::Code)
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }
}
