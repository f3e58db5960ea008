// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generic member accessor routine.
//!
//! Every member descriptor carries an [`AccessorKind`]; one routine reads
//! and writes through it, so no per-member code is generated.

use super::MemberDescriptor;
use crate::error::{Error, Result};
use crate::runtime::{Instance, Value};
use std::fmt;

/// Typed getter.
pub type GetterFn = fn(&dyn Instance) -> Result<Value>;

/// Typed setter.
pub type SetterFn = fn(&mut dyn Instance, Value) -> Result<()>;

/// How a member's value is reached on an instance.
#[derive(Clone, Copy)]
pub enum AccessorKind {
    /// Value stored in an instance slot.
    Field { slot: u32 },
    /// Value reached through typed accessor functions.
    Indirect { get: GetterFn, set: Option<SetterFn> },
    /// Member exists in the schema but cannot be driven generically.
    Unsupported,
}

impl fmt::Debug for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessorKind::Field { slot } => write!(f, "Field({:#x})", slot),
            AccessorKind::Indirect { set, .. } => {
                write!(f, "Indirect(writable: {})", set.is_some())
            }
            AccessorKind::Unsupported => write!(f, "Unsupported"),
        }
    }
}

/// Who is performing a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOrigin {
    /// The stream reader populating a freshly constructed graph.
    Deserializer,
    /// Ordinary host code.
    Code,
}

pub(crate) fn read_member(member: &MemberDescriptor, target: &dyn Instance) -> Result<Value> {
    match member.accessor() {
        AccessorKind::Field { slot } => Ok(target.field(slot).unwrap_or(Value::Null)),
        AccessorKind::Indirect { get, .. } => get(target),
        AccessorKind::Unsupported => {
            Err(Error::AccessorUnsupported(member.qualified_name()))
        }
    }
}

pub(crate) fn write_member(
    member: &MemberDescriptor,
    target: &mut dyn Instance,
    value: Value,
    origin: WriteOrigin,
) -> Result<()> {
    let accessor = member.accessor();
    if let AccessorKind::Unsupported = accessor {
        return Err(Error::AccessorUnsupported(member.qualified_name()));
    }
    if member.is_read_only() {
        return Err(Error::ReadOnlyMember(member.qualified_name()));
    }
    if member.is_write_privileged() && origin != WriteOrigin::Deserializer {
        return Err(Error::PrivilegedWrite(member.qualified_name()));
    }
    check_value_type(member, &value)?;

    match accessor {
        AccessorKind::Field { slot } => {
            target.set_field(slot, value);
            Ok(())
        }
        AccessorKind::Indirect { set: Some(set), .. } => set(target, value),
        AccessorKind::Indirect { set: None, .. } => {
            Err(Error::ReadOnlyMember(member.qualified_name()))
        }
        AccessorKind::Unsupported => Err(Error::AccessorUnsupported(member.qualified_name())),
    }
}

/// Object references must be assignable to the declared value type.
/// Scalars are converted upstream and pass through.
fn check_value_type(member: &MemberDescriptor, value: &Value) -> Result<()> {
    if let Value::Object(object) = value {
        if !object.type_handle().is_assignable_to(member.value_type()) {
            return Err(Error::TypeMismatch {
                member: member.qualified_name(),
                expected: member.value_type().full_name(),
            });
        }
    }
    Ok(())
}
