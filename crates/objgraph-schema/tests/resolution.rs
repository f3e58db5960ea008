// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::cast_possible_truncation)] // Test parameters
#![allow(clippy::cast_possible_wrap)] // Test conversions
#![allow(clippy::float_cmp)] // Test assertions with constants
#![allow(clippy::missing_panics_doc)] // Tests/examples panic on failure
#![allow(clippy::items_after_statements)] // Test helpers
#![allow(clippy::too_many_lines)] // Example/test code
#![allow(clippy::redundant_closure_for_method_calls)] // Test code clarity

//! End-to-end resolution tests
//!
//! Drives the public API the way a stream reader does: wire ids first,
//! then member names, then host types that the compact tables do not know.

use objgraph_schema::config::{MEMBER_ID_MAX, TYPE_ID_MAX};
use objgraph_schema::{
    AccessorKind, CollectionKind, ConverterRef, Error, Instance, MemberFlags, PropertyBag,
    Registry, RuntimeType, StaticTypeResolver, TypeDescriptor, UnsupportedReason, Value,
    WriteOrigin,
};
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// Wire ids
// ============================================================================

#[test]
fn every_type_id_resolves_and_round_trips() {
    let registry = Registry::builder().build();
    let mut names = HashSet::new();
    for magnitude in 1..=TYPE_ID_MAX as i16 {
        let desc = registry.get_type(-magnitude).expect("in range");
        assert_eq!(desc.wire_id(), Some(-magnitude));
        assert!(names.insert(desc.name().to_string()), "{}", desc.name());
        let by_name = registry.resolve_type_name(desc.name()).expect("by name");
        assert!(Arc::ptr_eq(&desc, &by_name));
        let by_handle = registry.get_or_create(desc.handle()).expect("by handle");
        assert!(Arc::ptr_eq(&desc, &by_handle), "{}", desc.name());
    }
    assert_eq!(registry.stats().type_builds, u64::from(TYPE_ID_MAX));
    assert_eq!(registry.stats().synthesized, 0);
}

#[test]
fn every_member_id_resolves_by_owner_and_name() {
    let registry = Registry::builder().build();
    for magnitude in 1..=MEMBER_ID_MAX as i16 {
        let member = registry.get_member(-magnitude).expect("in range");
        let found = if member.is_attachable() {
            registry.resolve_attached_member(member.owner().name(), member.name())
        } else {
            registry.resolve_member(member.owner().name(), member.name())
        }
        .expect("dispatch");
        assert!(
            Arc::ptr_eq(&member, &found),
            "{} dispatched to {}",
            member.qualified_name(),
            found.qualified_name()
        );
    }
}

#[test]
fn out_of_range_ids_are_data_errors() {
    let registry = Registry::builder().build();
    for id in [-760i16, -1000, i16::MIN] {
        let err = registry.get_type(id).unwrap_err();
        assert_eq!(err, Error::UnknownIdentifier(id));
        assert!(!err.is_fatal());
    }
    for id in [-271i16, -5000] {
        assert_eq!(registry.get_member(id).unwrap_err(), Error::UnknownIdentifier(id));
    }
    for id in [0i16, 1, 759, i16::MAX] {
        let err = registry.get_type(id).unwrap_err();
        assert!(err.is_fatal(), "{} should be a caller bug", id);
    }
}

// ============================================================================
// Known vocabulary
// ============================================================================

#[test]
fn known_member_flags() {
    let registry = Registry::builder().build();

    let template = registry
        .resolve_member("FrameworkTemplate", "Template")
        .expect("Template");
    assert!(template.is_write_privileged());
    assert!(template.has_deferred_loader());

    let resources = registry
        .resolve_member("FrameworkElement", "Resources")
        .expect("Resources");
    assert!(resources.is_ambient());

    let actual = registry.resolve_member("Button", "ActualWidth").expect("ActualWidth");
    assert!(actual.is_read_only());
    assert_eq!(actual.owner().name(), "FrameworkElement");

    let has_error = registry
        .resolve_attached_member("Validation", "HasError")
        .expect("HasError");
    assert!(has_error.flags().contains(MemberFlags::ATTACHABLE | MemberFlags::READ_ONLY));

    let handler = registry.resolve_member("EventSetter", "Handler").expect("Handler");
    assert!(matches!(handler.accessor(), AccessorKind::Unsupported));
}

#[test]
fn member_converter_overrides_type_converter() {
    let registry = Registry::builder().build();
    let width = registry.resolve_member("FrameworkElement", "Width").expect("Width");
    let converter = width.converter().expect("member converter");
    assert_eq!(
        registry.converter_type(converter).expect("converter").name(),
        "LengthConverter"
    );
    assert_eq!(width.value_type().name(), "Double");

    let double = registry.get_type(-167).expect("Double");
    assert_ne!(double.converter(), Some(converter));
}

#[test]
fn collection_and_dictionary_metadata() {
    let registry = Registry::builder().build();
    let dictionary = registry.resolve_type_name("ResourceDictionary").expect("dict");
    assert_eq!(dictionary.collection(), CollectionKind::Dictionary);
    assert!(dictionary.is_dictionary());

    let style = registry.resolve_type_name("Style").expect("Style");
    assert_eq!(style.dictionary_key_property(), Some("TargetType"));
    assert!(style.usable_before_init());
}

#[test]
fn known_positional_constructors_build_instances() {
    let registry = Registry::builder().build();
    let binding = registry.resolve_type_name("Binding").expect("Binding");
    let value = binding.construct(vec![Value::from("Title")]).expect("Binding(path)");
    let object = value.as_object().expect("object");
    assert_eq!(object.type_handle(), binding.handle());
    let bag = object.as_any().downcast_ref::<PropertyBag>().expect("bag");
    assert_eq!(bag.arguments(), &[Value::from("Title")]);

    assert!(matches!(
        binding.construct(vec![Value::Null, Value::Null, Value::Null]),
        Err(Error::ArityMismatch { arity: 3, .. })
    ));
}

#[test]
fn deserializer_populates_a_grid() {
    let registry = Registry::builder().build();
    let grid = registry.get_type(-258).expect("Grid");
    let row = registry.get_member(-131).expect("Grid.Row");
    let name = registry.resolve_member("Grid", "Name").expect("Name");

    let mut instance = PropertyBag::new(grid.handle().clone());
    row.write(&mut instance, Value::Int(1), WriteOrigin::Deserializer)
        .expect("Row");
    name.write(&mut instance, Value::from("LayoutRoot"), WriteOrigin::Code)
        .expect("Name");

    assert_eq!(row.read(&instance).expect("Row"), Value::Int(1));
    assert_eq!(name.read(&instance).expect("Name"), Value::from("LayoutRoot"));
    assert_eq!(instance.len(), 2);
}

#[test]
fn privileged_members_reject_code_writes() {
    let registry = Registry::builder().build();
    let deferrable = registry
        .resolve_member("ResourceDictionary", "DeferrableContent")
        .expect("DeferrableContent");
    let dictionary = registry.resolve_type_name("ResourceDictionary").expect("dict");
    let mut instance = PropertyBag::new(dictionary.handle().clone());

    assert!(matches!(
        deferrable.write(&mut instance, Value::Null, WriteOrigin::Code),
        Err(Error::PrivilegedWrite(_))
    ));
    deferrable
        .write(&mut instance, Value::Null, WriteOrigin::Deserializer)
        .expect("deserializer");
}

#[test]
fn object_values_are_checked_against_member_type() {
    let registry = Registry::builder().build();
    let content = registry.resolve_member("Button", "Content").expect("Content");
    let template = registry.resolve_member("Button", "Template").expect("Template");
    let style = registry.resolve_type_name("Style").expect("Style");
    let button = registry.resolve_type_name("Button").expect("Button");
    let mut target = PropertyBag::new(button.handle().clone());

    let child: Arc<dyn Instance> = Arc::new(PropertyBag::new(style.handle().clone()));
    // Content is typed Object: anything goes.
    content
        .write(&mut target, Value::Object(child.clone()), WriteOrigin::Code)
        .expect("object content");

    // Control.Template wants a ControlTemplate.
    assert!(matches!(
        template.write(&mut target, Value::Object(child), WriteOrigin::Deserializer),
        Err(Error::TypeMismatch { .. })
    ));
    // Scalars are left to converters.
    template
        .write(&mut target, Value::from("{StaticResource Round}"), WriteOrigin::Code)
        .expect("scalar");
}

// ============================================================================
// Host types
// ============================================================================

#[test]
fn host_control_is_synthesized_once() {
    let registry = Registry::builder().build();
    let control = registry.resolve_type_name("Control").expect("Control").handle().clone();
    let double = registry.resolve_type_name("Double").expect("Double").handle().clone();
    let gauge = RuntimeType::builder("App.Widgets", "App.Widgets", "Gauge")
        .base(control)
        .property("Level", double)
        .build();

    let first = registry.get_or_create(&gauge).expect("Gauge");
    let second = registry.describe(&gauge).expect("Gauge");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.stats().synthesized, 1);

    let level = registry.describe_member(&first, "Level").expect("Level");
    let font_size = registry.describe_member(&first, "FontSize").expect("FontSize");
    assert_eq!(level.id(), 0);
    assert_eq!(font_size.id(), 59);
    assert!(registry.describe_member(&first, "Nope").is_err());
}

#[test]
fn resolver_chain_order_decides() {
    let gauge = RuntimeType::builder("App.Widgets", "App.Widgets", "Gauge").build();
    let first = StaticTypeResolver::new("first").with(
        TypeDescriptor::builder(gauge.clone())
            .content_property("Level")
            .build(),
    );
    let second = StaticTypeResolver::new("second").with(
        TypeDescriptor::builder(gauge.clone())
            .content_property("Needle")
            .build(),
    );
    let registry = Registry::builder()
        .extension(Arc::new(first))
        .extension(Arc::new(second))
        .build();

    let resolved = registry.get_or_create(&gauge).expect("Gauge");
    assert_eq!(resolved.content_property(), Some("Level"));
    assert_eq!(registry.extension_count(), 2);
}

#[test]
fn same_name_in_other_module_is_distinct() {
    let registry = Registry::builder().build();
    let imposter = RuntimeType::builder("Plugin", "Plugin", "Grid")
        .converter("GridLengthConverter")
        .build();
    let described = registry.get_or_create(&imposter).expect("imposter");
    let real = registry.get_type(-258).expect("Grid");
    assert!(!Arc::ptr_eq(&described, &real));
    assert_eq!(described.content_property(), None);
    assert!(matches!(described.converter(), Some(ConverterRef::Known(_))));
    assert_eq!(registry.stats().rejected_collisions, 1);
}

#[test]
fn ineligible_host_types_are_retried_not_cached() {
    let registry = Registry::builder().build();
    let hidden = RuntimeType::builder("App", "App", "Hidden").non_public().build();
    for _ in 0..2 {
        assert!(matches!(
            registry.get_or_create(&hidden),
            Err(Error::UnsupportedType {
                reason: UnsupportedReason::NotPublic,
                ..
            })
        ));
    }
    assert!(!registry.is_known(&hidden));
}

#[test]
fn global_registry_is_shared() {
    let a = Registry::global();
    let b = Registry::global();
    assert!(std::ptr::eq(a, b));
    let button = a.get_type(-63).expect("Button");
    assert!(Arc::ptr_eq(&button, &b.get_type(-63).expect("Button")));
}
