// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime reflection model.
//!
//! The registry describes types it finds in the host object model. This
//! module is that object model's surface: handles to runtime types, their
//! reflected properties and constructors, and the dynamic values that flow
//! through accessors.

mod handle;
mod instance;
mod value;

pub use handle::{
    positional_factory, Ancestry, FactoryFn, RuntimeConstructor, RuntimeProperty, RuntimeType,
    RuntimeTypeBuilder, TypeHandle,
};
pub use instance::{Instance, PropertyBag};
pub use value::Value;
