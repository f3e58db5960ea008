// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value types.

use super::Instance;
use std::fmt;
use std::sync::Arc;

/// A dynamic value flowing through member accessors and factories.
///
/// Scalars arrive already converted by the (external) value converters;
/// object references are shared instances of the host object model.
#[derive(Clone)]
pub enum Value {
    // Primitives
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),

    // Composites
    Object(Arc<dyn Instance>),
    List(Vec<Value>),

    // Special
    Null,
}

impl Value {
    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as float (integers widen).
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as object reference.
    pub fn as_object(&self) -> Option<&Arc<dyn Instance>> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            // Object identity, not structural equality.
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "Bool({})", v),
            Self::Int(v) => write!(f, "Int({})", v),
            Self::Float(v) => write!(f, "Float({})", v),
            Self::Str(v) => write!(f, "Str({:?})", v),
            Self::Object(v) => write!(f, "Object({})", v.type_handle()),
            Self::List(v) => f.debug_list().entries(v).finish(),
            Self::Null => write!(f, "Null"),
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Arc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Arc::from(v))
    }
}

impl From<Arc<dyn Instance>> for Value {
    fn from(v: Arc<dyn Instance>) -> Self {
        Self::Object(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}
