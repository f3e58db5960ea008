// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Immutable type descriptors.

use crate::assembly::AssemblyId;
use crate::error::{Error, Result};
use crate::runtime::{positional_factory, FactoryFn, PropertyBag, TypeHandle, Value};
use std::fmt;
use std::sync::Arc;

/// Collection protocol a type implements, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionKind {
    #[default]
    None,
    /// Ordered list of children.
    Sequence,
    /// Keyed children (requires a dictionary-key property on items).
    Dictionary,
}

/// Reference to a value-converter type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConverterRef {
    /// Compact type id (magnitude) of a well-known converter.
    Known(u16),
    /// Converter declared by name on a runtime type.
    Named(Arc<str>),
}

/// Producer of a type's default value.
pub type DefaultValueFn = fn() -> Value;

/// How a descriptor came into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorOrigin {
    /// Built from the compact well-known tables.
    Known,
    /// Supplied by an extension resolver or host code.
    Provided,
    /// Reflected from runtime metadata on first use.
    Synthesized,
}

/// One constructor overload, keyed by positional arity.
#[derive(Clone)]
pub struct ConstructorOverload {
    arguments: Vec<TypeHandle>,
    factory: FactoryFn,
}

impl ConstructorOverload {
    pub fn new(arguments: Vec<TypeHandle>, factory: FactoryFn) -> Self {
        Self { arguments, factory }
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// Declared argument types, in position order.
    pub fn arguments(&self) -> &[TypeHandle] {
        &self.arguments
    }

    pub(crate) fn factory(&self) -> FactoryFn {
        self.factory
    }
}

impl fmt::Debug for ConstructorOverload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.arguments.iter().map(TypeHandle::name)).finish()
    }
}

/// Immutable description of one serializable type.
///
/// Obtain descriptors from a [`Registry`](crate::Registry); every path to
/// the same type yields the same `Arc` instance. Host code that supplies
/// descriptors through an extension resolver builds them with
/// [`TypeDescriptor::builder`].
pub struct TypeDescriptor {
    /// Wire id magnitude, 0 for dynamic types.
    id: u16,
    name: Arc<str>,
    handle: TypeHandle,
    assembly: Option<AssemblyId>,
    origin: DescriptorOrigin,

    default_value: Option<DefaultValueFn>,
    converter: Option<ConverterRef>,
    content_property: Option<Arc<str>>,
    dictionary_key_property: Option<Arc<str>>,
    collection: CollectionKind,
    usable_before_init: bool,
    constructors: Vec<ConstructorOverload>,
}

impl TypeDescriptor {
    /// Start a provided (non-compact) descriptor for `handle`.
    pub fn builder(handle: TypeHandle) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(handle)
    }

    /// Wire id magnitude; 0 for dynamic types.
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Wire id as it appears in a stream (`-id`), `None` for dynamic types.
    pub fn wire_id(&self) -> Option<i16> {
        (self.id != 0).then(|| -(self.id as i16))
    }

    pub fn is_known(&self) -> bool {
        self.id != 0
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> &TypeHandle {
        &self.handle
    }

    /// Assembly reference of a compact type.
    pub fn assembly(&self) -> Option<AssemblyId> {
        self.assembly
    }

    pub fn origin(&self) -> DescriptorOrigin {
        self.origin
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    /// Produce a fresh default value, if the type declares one.
    pub fn default_value(&self) -> Option<Value> {
        self.default_value.map(|produce| produce())
    }

    pub fn converter(&self) -> Option<&ConverterRef> {
        self.converter.as_ref()
    }

    pub fn content_property(&self) -> Option<&str> {
        self.content_property.as_deref()
    }

    pub fn dictionary_key_property(&self) -> Option<&str> {
        self.dictionary_key_property.as_deref()
    }

    pub fn collection(&self) -> CollectionKind {
        self.collection
    }

    pub fn is_collection(&self) -> bool {
        self.collection != CollectionKind::None
    }

    pub fn is_dictionary(&self) -> bool {
        self.collection == CollectionKind::Dictionary
    }

    pub fn usable_before_init(&self) -> bool {
        self.usable_before_init
    }

    pub fn constructors(&self) -> &[ConstructorOverload] {
        &self.constructors
    }

    /// Overload taking exactly `arity` positional arguments.
    pub fn constructor(&self, arity: usize) -> Option<&ConstructorOverload> {
        self.constructors.iter().find(|c| c.arity() == arity)
    }

    /// Construct an instance from positional arguments.
    ///
    /// Fails with [`Error::ArityMismatch`] when no overload takes
    /// `arguments.len()` values.
    pub fn construct(&self, arguments: Vec<Value>) -> Result<Value> {
        let overload = self
            .constructor(arguments.len())
            .ok_or_else(|| Error::ArityMismatch {
                type_name: self.name.to_string(),
                arity: arguments.len(),
            })?;
        (overload.factory())(&self.handle, arguments)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("handle", &self.handle)
            .field("origin", &self.origin)
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

/// Factory for the arity-0 overload.
fn default_factory(handle: &TypeHandle, _arguments: Vec<Value>) -> Result<Value> {
    Ok(Value::Object(Arc::new(PropertyBag::new(handle.clone()))))
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`TypeDescriptor`].
///
/// ```
/// use objgraph_schema::{RuntimeType, TypeDescriptor};
///
/// let handle = RuntimeType::builder("App", "App", "Gauge").build();
/// let desc = TypeDescriptor::builder(handle)
///     .content_property("Level")
///     .default_constructor()
///     .build();
///
/// assert_eq!(desc.name(), "Gauge");
/// assert_eq!(desc.id(), 0);
/// assert!(desc.constructor(0).is_some());
/// ```
pub struct TypeDescriptorBuilder {
    inner: TypeDescriptor,
}

impl TypeDescriptorBuilder {
    fn new(handle: TypeHandle) -> Self {
        Self {
            inner: TypeDescriptor {
                id: 0,
                name: Arc::from(handle.name()),
                handle,
                assembly: None,
                origin: DescriptorOrigin::Provided,
                default_value: None,
                converter: None,
                content_property: None,
                dictionary_key_property: None,
                collection: CollectionKind::None,
                usable_before_init: false,
                constructors: Vec::new(),
            },
        }
    }

    pub(crate) fn known(mut self, id: u16, assembly: AssemblyId) -> Self {
        self.inner.id = id;
        self.inner.assembly = Some(assembly);
        self.inner.origin = DescriptorOrigin::Known;
        self
    }

    pub(crate) fn synthesized(mut self) -> Self {
        self.inner.origin = DescriptorOrigin::Synthesized;
        self
    }

    pub fn default_value(mut self, produce: DefaultValueFn) -> Self {
        self.inner.default_value = Some(produce);
        self
    }

    pub fn converter(mut self, converter: ConverterRef) -> Self {
        self.inner.converter = Some(converter);
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

    pub fn collection(mut self, kind: CollectionKind) -> Self {
        self.inner.collection = kind;
        self
    }

    pub fn usable_before_init(mut self, usable: bool) -> Self {
        self.inner.usable_before_init = usable;
        self
    }

    /// Add the parameterless overload.
    pub fn default_constructor(self) -> Self {
        self.constructor(Vec::new(), default_factory)
    }

    /// Add a positional overload whose instances record their arguments.
    pub fn positional_constructor(self, arguments: Vec<TypeHandle>) -> Self {
        self.constructor(arguments, positional_factory)
    }

    /// Add an overload; a later overload with the same arity is ignored.
    pub fn constructor(mut self, arguments: Vec<TypeHandle>, factory: FactoryFn) -> Self {
        let arity = arguments.len();
        if self.inner.constructor(arity).is_none() {
            self.inner
                .constructors
                .push(ConstructorOverload::new(arguments, factory));
        }
        self
    }

    pub fn build(self) -> TypeDescriptor {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeType;

    fn int32() -> TypeHandle {
        RuntimeType::builder("System.Runtime", "System", "Int32").build()
    }

    #[test]
    fn construct_dispatches_on_arity() {
        let handle = RuntimeType::builder("App", "App", "Span").build();
        let desc = TypeDescriptor::builder(handle.clone())
            .default_constructor()
            .positional_constructor(vec![int32(), int32()])
            .build();

        let empty = desc.construct(Vec::new()).expect("default ctor");
        assert_eq!(empty.as_object().map(|o| o.type_handle().clone()), Some(handle));

        let pair = desc
            .construct(vec![Value::from(1i32), Value::from(2i32)])
            .expect("positional ctor");
        let bag = pair
            .as_object()
            .and_then(|o| o.as_any().downcast_ref::<PropertyBag>())
            .expect("bag");
        assert_eq!(bag.arguments(), &[Value::from(1i32), Value::from(2i32)]);

        let err = desc.construct(vec![Value::Null]).unwrap_err();
        assert_eq!(
            err,
            Error::ArityMismatch {
                type_name: "Span".into(),
                arity: 1
            }
        );
    }

    #[test]
    fn duplicate_arity_keeps_first_overload() {
        let handle = RuntimeType::builder("App", "App", "Point").build();
        let string = RuntimeType::builder("System.Runtime", "System", "String").build();
        let desc = TypeDescriptor::builder(handle)
            .positional_constructor(vec![int32()])
            .positional_constructor(vec![string])
            .build();
        assert_eq!(desc.constructors().len(), 1);
        assert_eq!(desc.constructor(1).map(|c| c.arguments()[0].name()), Some("Int32"));
    }

    #[test]
    fn provided_descriptors_are_dynamic() {
        let handle = RuntimeType::builder("App", "App", "Gauge").build();
        let desc = TypeDescriptor::builder(handle).build();
        assert_eq!(desc.id(), 0);
        assert_eq!(desc.wire_id(), None);
        assert!(!desc.is_known());
        assert_eq!(desc.origin(), DescriptorOrigin::Provided);
        assert!(desc.default_value().is_none());
    }
}
