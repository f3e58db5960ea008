// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type handles and the reflection metadata behind them.

use super::{Instance, PropertyBag, Value};
use crate::descriptor::{CollectionKind, GetterFn, SetterFn};
use crate::error::Result;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Factory invoked with positional constructor arguments.
pub type FactoryFn = fn(&TypeHandle, Vec<Value>) -> Result<Value>;

/// A declared property discovered through reflection.
#[derive(Debug, Clone)]
pub struct RuntimeProperty {
    pub name: Arc<str>,
    pub value_type: TypeHandle,
    /// `false` for get-only properties.
    pub writable: bool,
    /// Attached (owner-qualified, set on foreign instances) property.
    pub attachable: bool,
    /// Typed accessors; `None` means the value lives in instance slots.
    pub accessors: Option<(GetterFn, Option<SetterFn>)>,
}

/// A public constructor discovered through reflection.
#[derive(Clone)]
pub struct RuntimeConstructor {
    pub arguments: Vec<TypeHandle>,
    /// `None` falls back to the positional [`PropertyBag`] factory.
    pub factory: Option<FactoryFn>,
}

impl fmt::Debug for RuntimeConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeConstructor")
            .field("arguments", &self.arguments)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}

/// Reflection data for one runtime type.
///
/// Built once with [`RuntimeType::builder`] and shared behind a
/// [`TypeHandle`]; never mutated afterwards.
#[derive(Debug)]
pub struct RuntimeType {
    module: Arc<str>,
    namespace: Arc<str>,
    name: Arc<str>,
    base: Option<TypeHandle>,

    is_public: bool,
    is_abstract: bool,
    is_open_generic: bool,
    is_schema_type: bool,
    has_default_constructor: bool,

    properties: Vec<RuntimeProperty>,
    constructors: Vec<RuntimeConstructor>,

    // Attribute metadata
    content_property: Option<Arc<str>>,
    dictionary_key_property: Option<Arc<str>>,
    converter: Option<Arc<str>>,
    usable_before_init: bool,
    collection: CollectionKind,
}

impl RuntimeType {
    /// Start describing a type declared in `module` as `namespace.name`.
    pub fn builder(module: &str, namespace: &str, name: &str) -> RuntimeTypeBuilder {
        RuntimeTypeBuilder::new(module, namespace, name)
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> Option<&TypeHandle> {
        self.base.as_ref()
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_open_generic(&self) -> bool {
        self.is_open_generic
    }

    pub fn is_schema_type(&self) -> bool {
        self.is_schema_type
    }

    pub fn has_default_constructor(&self) -> bool {
        self.has_default_constructor
    }

    /// Properties declared on this type (not inherited ones).
    pub fn properties(&self) -> &[RuntimeProperty] {
        &self.properties
    }

    pub fn constructors(&self) -> &[RuntimeConstructor] {
        &self.constructors
    }

    pub fn content_property(&self) -> Option<&Arc<str>> {
        self.content_property.as_ref()
    }

    pub fn dictionary_key_property(&self) -> Option<&Arc<str>> {
        self.dictionary_key_property.as_ref()
    }

    /// Name of the value converter type declared for this type.
    pub fn converter(&self) -> Option<&Arc<str>> {
        self.converter.as_ref()
    }

    pub fn usable_before_init(&self) -> bool {
        self.usable_before_init
    }

    pub fn collection(&self) -> CollectionKind {
        self.collection
    }

    /// Find a declared property by name.
    pub fn property(&self, name: &str) -> Option<&RuntimeProperty> {
        self.properties.iter().find(|p| &*p.name == name)
    }
}

// ============================================================================
// TypeHandle
// ============================================================================

/// Shared, cheaply clonable reference to a [`RuntimeType`].
///
/// Two handles are equal when they name the same declared type:
/// same module, namespace and simple name. Same-named types from
/// different modules are distinct.
#[derive(Clone)]
pub struct TypeHandle(Arc<RuntimeType>);

impl TypeHandle {
    pub fn new(runtime: RuntimeType) -> Self {
        Self(Arc::new(runtime))
    }

    pub fn runtime(&self) -> &RuntimeType {
        &self.0
    }

    /// Simple (unqualified) name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn namespace(&self) -> &str {
        &self.0.namespace
    }

    pub fn module(&self) -> &str {
        &self.0.module
    }

    pub fn base(&self) -> Option<&TypeHandle> {
        self.0.base.as_ref()
    }

    /// `namespace.name`, or just the name for the empty namespace.
    pub fn full_name(&self) -> String {
        if self.0.namespace.is_empty() {
            self.0.name.to_string()
        } else {
            format!("{}.{}", self.0.namespace, self.0.name)
        }
    }

    /// Iterate this handle followed by its base chain.
    pub fn ancestry(&self) -> Ancestry<'_> {
        Ancestry { next: Some(self) }
    }

    /// `true` if `self` is `target` or derives from it.
    ///
    /// Every type is assignable to the root `System.Object`.
    pub fn is_assignable_to(&self, target: &TypeHandle) -> bool {
        if target.namespace() == "System" && target.name() == "Object" {
            return true;
        }
        self.ancestry().any(|h| h == target)
    }

    /// Same underlying allocation (stronger than `==`).
    pub fn ptr_eq(&self, other: &TypeHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        self.0.name == other.0.name
            && self.0.namespace == other.0.namespace
            && self.0.module == other.0.module
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.module.hash(state);
        self.0.namespace.hash(state);
        self.0.name.hash(state);
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHandle({}, {})", self.full_name(), self.0.module)
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Iterator over a handle and its bases, most derived first.
pub struct Ancestry<'a> {
    next: Option<&'a TypeHandle>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a TypeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.base();
        Some(current)
    }
}

/// Default factory: record positional arguments in a [`PropertyBag`].
pub fn positional_factory(handle: &TypeHandle, arguments: Vec<Value>) -> Result<Value> {
    let bag: Arc<dyn Instance> = Arc::new(PropertyBag::with_arguments(handle.clone(), arguments));
    Ok(Value::Object(bag))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`RuntimeType`].
///
/// # Example
///
/// ```
/// use objgraph_schema::RuntimeType;
///
/// let gauge = RuntimeType::builder("App.Widgets", "App.Widgets", "Gauge")
///     .property("Level", RuntimeType::builder("System", "System", "Double").build())
///     .content_property("Level")
///     .build();
///
/// assert_eq!(gauge.full_name(), "App.Widgets.Gauge");
/// assert!(gauge.runtime().has_default_constructor());
/// ```
pub struct RuntimeTypeBuilder {
    inner: RuntimeType,
}

impl RuntimeTypeBuilder {
    fn new(module: &str, namespace: &str, name: &str) -> Self {
        Self {
            inner: RuntimeType {
                module: Arc::from(module),
                namespace: Arc::from(namespace),
                name: Arc::from(name),
                base: None,
                is_public: true,
                is_abstract: false,
                is_open_generic: false,
                is_schema_type: false,
                has_default_constructor: true,
                properties: Vec::new(),
                constructors: Vec::new(),
                content_property: None,
                dictionary_key_property: None,
                converter: None,
                usable_before_init: false,
                collection: CollectionKind::None,
            },
        }
    }

    /// Set the base type.
    pub fn base(mut self, base: TypeHandle) -> Self {
        self.inner.base = Some(base);
        self
    }

    pub fn abstract_type(mut self) -> Self {
        self.inner.is_abstract = true;
        self
    }

    pub fn open_generic(mut self) -> Self {
        self.inner.is_open_generic = true;
        self
    }

    pub fn non_public(mut self) -> Self {
        self.inner.is_public = false;
        self
    }

    /// Mark as part of the schema system (never described dynamically).
    pub fn schema_type(mut self) -> Self {
        self.inner.is_schema_type = true;
        self
    }

    pub fn no_default_constructor(mut self) -> Self {
        self.inner.has_default_constructor = false;
        self
    }

    /// Add a read/write slot-backed property.
    pub fn property(self, name: &str, value_type: TypeHandle) -> Self {
        self.push_property(name, value_type, true, false, None)
    }

    /// Add a get-only property.
    pub fn read_only_property(self, name: &str, value_type: TypeHandle) -> Self {
        self.push_property(name, value_type, false, false, None)
    }

    /// Add an attached property.
    pub fn attached_property(self, name: &str, value_type: TypeHandle) -> Self {
        self.push_property(name, value_type, true, true, None)
    }

    /// Add a property with typed accessors.
    pub fn property_with_accessors(
        self,
        name: &str,
        value_type: TypeHandle,
        get: GetterFn,
        set: Option<SetterFn>,
    ) -> Self {
        let writable = set.is_some();
        self.push_property(name, value_type, writable, false, Some((get, set)))
    }

    fn push_property(
        mut self,
        name: &str,
        value_type: TypeHandle,
        writable: bool,
        attachable: bool,
        accessors: Option<(GetterFn, Option<SetterFn>)>,
    ) -> Self {
        self.inner.properties.push(RuntimeProperty {
            name: Arc::from(name),
            value_type,
            writable,
            attachable,
            accessors,
        });
        self
    }

    /// Add a positional constructor.
    pub fn constructor(mut self, arguments: Vec<TypeHandle>, factory: Option<FactoryFn>) -> Self {
        self.inner.constructors.push(RuntimeConstructor { arguments, factory });
        self
    }

    pub fn content_property(mut self, name: &str) -> Self {
        self.inner.content_property = Some(Arc::from(name));
        self
    }

    pub fn dictionary_key_property(mut self, name: &str) -> Self {
        self.inner.dictionary_key_property = Some(Arc::from(name));
        self
    }

    /// Declare a value converter by type name.
    pub fn converter(mut self, name: &str) -> Self {
        self.inner.converter = Some(Arc::from(name));
        self
    }

    pub fn usable_before_init(mut self) -> Self {
        self.inner.usable_before_init = true;
        self
    }

    pub fn collection(mut self, kind: CollectionKind) -> Self {
        self.inner.collection = kind;
        self
    }

    /// Finish and wrap in a handle.
    pub fn build(self) -> TypeHandle {
        TypeHandle::new(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(handle: &TypeHandle) -> u64 {
        let mut hasher = DefaultHasher::new();
        handle.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn identity_is_module_namespace_and_name() {
        let a = RuntimeType::builder("App", "App.Ui", "Gauge").build();
        let b = RuntimeType::builder("App", "App.Ui", "Gauge")
            .usable_before_init()
            .build();
        let other_module = RuntimeType::builder("Plugin", "App.Ui", "Gauge").build();

        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, other_module);
    }

    #[test]
    fn ancestry_walks_most_derived_first() {
        let root = RuntimeType::builder("App", "App", "Root").build();
        let mid = RuntimeType::builder("App", "App", "Mid").base(root.clone()).build();
        let leaf = RuntimeType::builder("App", "App", "Leaf").base(mid.clone()).build();

        let names: Vec<&str> = leaf.ancestry().map(TypeHandle::name).collect();
        assert_eq!(names, vec!["Leaf", "Mid", "Root"]);
        assert!(leaf.is_assignable_to(&root));
        assert!(!root.is_assignable_to(&leaf));
    }

    #[test]
    fn positional_factory_records_arguments() {
        let handle = RuntimeType::builder("App", "App", "Pair").build();
        let value = positional_factory(&handle, vec![Value::from(1i32), Value::from(2i32)])
            .expect("factory");
        let object = value.as_object().expect("object");
        let bag = object
            .as_any()
            .downcast_ref::<PropertyBag>()
            .expect("bag");
        assert_eq!(bag.arguments().len(), 2);
        assert_eq!(object.type_handle(), &handle);
    }
}
