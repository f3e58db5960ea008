// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Object-model seam used by the generic member accessor routine.

use super::{TypeHandle, Value};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// A live object of the host UI object model.
///
/// The registry never constructs real UI objects itself; it only needs
/// slot-addressed storage so that [`AccessorKind::Field`] members can be
/// read and written without per-member code.
///
/// [`AccessorKind::Field`]: crate::AccessorKind::Field
pub trait Instance: Any + Send + Sync + fmt::Debug {
    /// Runtime type of this object.
    fn type_handle(&self) -> &TypeHandle;

    /// Read the value stored in `slot`, if any.
    fn field(&self, slot: u32) -> Option<Value>;

    /// Store `value` in `slot`.
    fn set_field(&mut self, slot: u32, value: Value);

    fn as_any(&self) -> &dyn Any;
}

/// Map-backed [`Instance`] used for synthesized and positional construction.
#[derive(Debug, Clone)]
pub struct PropertyBag {
    /// Runtime type.
    handle: TypeHandle,
    /// Slot storage.
    fields: HashMap<u32, Value>,
    /// Positional constructor arguments, in declaration order.
    arguments: Vec<Value>,
}

impl PropertyBag {
    /// Create an empty bag for `handle`.
    pub fn new(handle: TypeHandle) -> Self {
        Self {
            handle,
            fields: HashMap::new(),
            arguments: Vec::new(),
        }
    }

    /// Create a bag recording positional constructor arguments.
    pub fn with_arguments(handle: TypeHandle, arguments: Vec<Value>) -> Self {
        Self {
            handle,
            fields: HashMap::new(),
            arguments,
        }
    }

    /// Positional arguments the instance was constructed with.
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Instance for PropertyBag {
    fn type_handle(&self) -> &TypeHandle {
        &self.handle
    }

    fn field(&self, slot: u32) -> Option<Value> {
        self.fields.get(&slot).cloned()
    }

    fn set_field(&mut self, slot: u32, value: Value) {
        self.fields.insert(slot, value);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
