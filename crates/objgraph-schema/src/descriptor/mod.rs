// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type and member descriptors.
//!
//! Descriptors are immutable once published and shared as `Arc`s; identity
//! (`Arc::ptr_eq`) is meaningful, since the registry hands out exactly one
//! instance per type and per member.

mod accessor;
mod member_desc;
mod type_desc;

pub use accessor::{AccessorKind, GetterFn, SetterFn, WriteOrigin};
pub use member_desc::{MemberDescriptor, MemberFlags};
pub use type_desc::{
    CollectionKind, ConstructorOverload, ConverterRef, DefaultValueFn, DescriptorOrigin,
    TypeDescriptor, TypeDescriptorBuilder,
};
