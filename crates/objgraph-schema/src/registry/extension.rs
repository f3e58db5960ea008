// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Extension resolvers.
//!
//! Hosts register resolvers to describe their own types by name. The chain
//! is append-only and consulted in registration order.

use crate::descriptor::TypeDescriptor;
use crate::runtime::TypeHandle;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Describes types the compact tables do not know.
///
/// Resolvers run under the registry lock and may call back into the
/// registry (the lock is reentrant).
pub trait TypeResolver: Send + Sync {
    /// Descriptor for the simple type name `name`, if this resolver owns it.
    fn try_resolve(&self, name: &str) -> Option<Arc<TypeDescriptor>>;

    /// Resolver label for logging.
    fn name(&self) -> &str {
        "anonymous"
    }
}

/// Resolver over a fixed set of descriptors.
///
/// # Example
///
/// ```
/// use objgraph_schema::{RuntimeType, StaticTypeResolver, TypeDescriptor, TypeResolver};
///
/// let gauge = RuntimeType::builder("App", "App", "Gauge").build();
/// let resolver = StaticTypeResolver::new("app-widgets")
///     .with(TypeDescriptor::builder(gauge).default_constructor().build());
///
/// assert!(resolver.try_resolve("Gauge").is_some());
/// assert!(resolver.try_resolve("Dial").is_none());
/// ```
#[derive(Debug, Default)]
pub struct StaticTypeResolver {
    label: String,
    types: HashMap<String, Arc<TypeDescriptor>>,
}

impl StaticTypeResolver {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            types: HashMap::new(),
        }
    }

    /// Add a descriptor; a later descriptor with the same name replaces it.
    pub fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types
            .insert(descriptor.name().to_string(), Arc::new(descriptor));
    }

    pub fn with(mut self, descriptor: TypeDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeResolver for StaticTypeResolver {
    fn try_resolve(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.types.get(name).cloned()
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// Ordered, append-only resolver chain.
#[derive(Default)]
pub(crate) struct ExtensionChain {
    resolvers: RwLock<Vec<Arc<dyn TypeResolver>>>,
}

impl ExtensionChain {
    pub(crate) fn push(&self, resolver: Arc<dyn TypeResolver>) {
        let mut resolvers = self.resolvers.write();
        log::debug!(
            "[extension] registered '{}' at position {}",
            resolver.name(),
            resolvers.len()
        );
        resolvers.push(resolver);
    }

    pub(crate) fn len(&self) -> usize {
        self.resolvers.read().len()
    }

    // Snapshot so resolvers run without holding the chain lock; a resolver
    // may register further resolvers.
    fn snapshot(&self) -> Vec<Arc<dyn TypeResolver>> {
        self.resolvers.read().clone()
    }

    /// First answer whose handle equals `handle`.
    pub(crate) fn resolve_handle(&self, handle: &TypeHandle) -> Option<Arc<TypeDescriptor>> {
        for resolver in self.snapshot() {
            match resolver.try_resolve(handle.name()) {
                Some(found) if found.handle() == handle => {
                    log::debug!("[extension] '{}' resolved {}", resolver.name(), handle);
                    return Some(found);
                }
                Some(found) => {
                    log::trace!(
                        "[extension] '{}' answered {} for {}, skipping",
                        resolver.name(),
                        found.handle(),
                        handle
                    );
                }
                None => {}
            }
        }
        None
    }

    /// First answer for a bare name.
    pub(crate) fn resolve_name(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.snapshot().into_iter().find_map(|resolver| {
            let found = resolver.try_resolve(name)?;
            log::debug!("[extension] '{}' resolved name {}", resolver.name(), name);
            Some(found)
        })
    }
}
