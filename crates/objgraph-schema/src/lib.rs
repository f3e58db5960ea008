// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # objgraph-schema - Schema registry for binary object-graph streams
//!
//! Compiled UI markup is stored as a compact binary stream in which type and
//! member references are small negative integers into a fixed well-known
//! vocabulary. This crate resolves those references, and everything the
//! stream names by string, to immutable descriptors a reader can use to
//! instantiate and populate the object graph.
//!
//! ## Quick Start
//!
//! ```rust
//! use objgraph_schema::{Registry, Result, Value, WriteOrigin};
//!
//! fn main() -> Result<()> {
//!     let registry = Registry::global();
//!
//!     // Wire ids from the stream
//!     let grid = registry.get_type(-258)?;
//!     let row = registry.get_member(-131)?;
//!     assert_eq!(grid.content_property(), Some("Children"));
//!
//!     // Generic member access on a constructed instance
//!     let instance = grid.construct(Vec::new())?;
//!     let mut bag = objgraph_schema::PropertyBag::new(grid.handle().clone());
//!     row.write(&mut bag, Value::Int(2), WriteOrigin::Deserializer)?;
//!     assert_eq!(row.read(&bag)?, Value::Int(2));
//!     assert!(instance.as_object().is_some());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |  get_type(-id) / get_member(-id)     resolve_member(owner, name)     |
//! |            |                                  |                      |
//! |    Identifier cache  <-------------  Name dispatch (15-char hash)    |
//! |            |                                                         |
//! |    Compact tables (759 types, 270 members, extras)                   |
//! +---------------------------------------------------------------------+
//! |  get_or_create(handle)                                               |
//! |    Master table -> known name -> extension chain -> synthesis       |
//! +---------------------------------------------------------------------+
//! |  Assembly table (lazy module binding)                                |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Registry`] | Resolution and caching engine |
//! | [`TypeDescriptor`] | Immutable description of one type |
//! | [`MemberDescriptor`] | Immutable description of one member, with accessor |
//! | [`TypeHandle`] | Identity of a runtime type |
//! | [`TypeResolver`] | Host extension hook for unknown types |
//!
//! ## Features
//!
//! - `config-loaders`: YAML loading for [`RegistryConfig`]

pub mod assembly;
pub mod config;
pub mod descriptor;
pub mod error;
mod known;
pub mod registry;
pub mod runtime;

pub use assembly::{AssemblyId, ModuleHandle, ModuleLoader, StaticModuleLoader};
pub use config::RegistryConfig;
pub use descriptor::{
    AccessorKind, CollectionKind, ConstructorOverload, ConverterRef, DescriptorOrigin,
    MemberDescriptor, MemberFlags, TypeDescriptor, TypeDescriptorBuilder, WriteOrigin,
};
pub use error::{Error, Result, UnsupportedReason};
pub use registry::{Registry, RegistryBuilder, RegistryStats, StaticTypeResolver, TypeResolver};
pub use runtime::{Instance, PropertyBag, RuntimeType, TypeHandle, Value};
