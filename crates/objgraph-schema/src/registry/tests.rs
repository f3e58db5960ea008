// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;
use crate::config::DYNAMIC_SLOT_BASE;
use crate::descriptor::{AccessorKind, DescriptorOrigin, WriteOrigin};
use crate::error::UnsupportedReason;
use crate::runtime::{Instance, PropertyBag, RuntimeType, TypeHandle, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

fn registry() -> Registry {
    Registry::builder().build()
}

fn widget(name: &str) -> TypeHandle {
    RuntimeType::builder("App.Widgets", "App.Widgets", name).build()
}

/// Resolver that counts how often it is asked.
struct CountingResolver {
    calls: AtomicUsize,
    inner: StaticTypeResolver,
}

impl TypeResolver for CountingResolver {
    fn try_resolve(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.try_resolve(name)
    }

    fn name(&self) -> &str {
        "counting"
    }
}

// ============================================================================
// Identifier cache
// ============================================================================

#[test]
fn get_type_is_memoized() {
    let reg = registry();
    let first = reg.get_type(-63).expect("Button");
    let second = reg.get_type(-63).expect("Button");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.name(), "Button");
    assert_eq!(reg.stats().type_builds, 1);
    assert_eq!(reg.stats().hits, 1);
}

#[test]
fn get_type_range_errors() {
    let reg = registry();
    assert_eq!(reg.get_type(0).unwrap_err(), Error::InvalidIdentifier(0));
    assert_eq!(reg.get_type(12).unwrap_err(), Error::InvalidIdentifier(12));
    assert_eq!(reg.get_type(-760).unwrap_err(), Error::UnknownIdentifier(-760));
    assert!(reg.get_type(-759).is_ok());
    assert!(reg.get_type(-1).is_ok());
    // No negative caching: the failed ids publish nothing.
    assert_eq!(reg.published_types(), 2);
}

#[test]
fn get_member_builds_owner_once() {
    let reg = registry();
    let row = reg.get_member(-131).expect("Grid.Row");
    let column = reg.get_member(-127).expect("Grid.Column");
    assert!(Arc::ptr_eq(row.owner(), column.owner()));
    assert!(Arc::ptr_eq(row.owner(), &reg.get_type(-258).expect("Grid")));
    assert_eq!(reg.stats().type_builds, 1);
    assert_eq!(reg.stats().member_builds, 2);
    assert_eq!(reg.get_member(-271).unwrap_err(), Error::UnknownIdentifier(-271));
    assert_eq!(reg.get_member(3).unwrap_err(), Error::InvalidIdentifier(3));
}

#[test]
fn eager_population_fills_every_slot() {
    let reg = Registry::builder()
        .config(
            RegistryConfig::new()
                .eager_known_types(true)
                .eager_known_members(true),
        )
        .build();
    assert_eq!(reg.published_types(), usize::from(TYPE_ID_MAX));
    assert_eq!(reg.published_members(), usize::from(MEMBER_ID_MAX));
    let before = reg.stats().type_builds;
    reg.get_type(-601).expect("Style");
    assert_eq!(reg.stats().type_builds, before);
}

// ============================================================================
// Name dispatch
// ============================================================================

#[test]
fn resolve_member_shares_id_descriptor() {
    let reg = registry();
    let by_name = reg.resolve_member("Button", "Content").expect("Content");
    let by_id = reg.get_member(-47).expect("ContentControl.Content");
    assert!(Arc::ptr_eq(&by_name, &by_id));
    assert_eq!(by_name.owner().name(), "ContentControl");
}

#[test]
fn attached_members_need_the_attached_lookup() {
    let reg = registry();
    assert!(reg.resolve_member("Grid", "Row").is_none());
    let row = reg.resolve_attached_member("Grid", "Row").expect("Grid.Row");
    assert!(row.is_attachable());
    assert_eq!(row.id(), 131);
}

#[test]
fn extra_members_resolve_by_name_only() {
    let reg = registry();
    let cancel = reg.resolve_member("Button", "IsCancel").expect("IsCancel");
    assert_eq!(cancel.id(), 0);
    let again = reg.resolve_member("Button", "IsCancel").expect("IsCancel");
    assert!(Arc::ptr_eq(&cancel, &again));
    assert!(reg.resolve_member("Button", "IsCancelled").is_none());
}

#[test]
fn resolve_type_name_prefers_compact_table() {
    let reg = registry();
    let factory = reg
        .resolve_type_name("FrameworkElementFactory")
        .expect("factory");
    assert_eq!(factory.id(), 239);
    assert!(Arc::ptr_eq(&factory, &reg.get_type(-239).expect("factory")));
    assert_eq!(
        reg.resolve_type_name("Gauge").unwrap_err(),
        Error::NameNotFound("Gauge".into())
    );
}

#[test]
fn converter_type_resolves_both_forms() {
    let reg = registry();
    let string = reg.get_type(-593).expect("String");
    let converter = string.converter().expect("converter");
    assert_eq!(reg.converter_type(converter).expect("StringConverter").name(), "StringConverter");

    let named = ConverterRef::Named(Arc::from("BrushConverter"));
    assert_eq!(reg.converter_type(&named).expect("named").id(), 60);
}

#[test]
fn converter_type_rejects_out_of_range_known_ids() {
    let reg = registry();
    let cases = [
        (760u16, -760i16),
        (32_767, -32_767),
        (32_768, i16::MIN),
        (40_000, i16::MIN),
        (u16::MAX, i16::MIN),
        (0, i16::MIN),
    ];
    for (magnitude, wire) in cases {
        assert_eq!(
            reg.converter_type(&ConverterRef::Known(magnitude)).unwrap_err(),
            Error::UnknownIdentifier(wire),
            "Known({})",
            magnitude
        );
    }
    assert_eq!(reg.published_types(), 0);
}

// ============================================================================
// Master table
// ============================================================================

#[test]
fn known_handles_map_to_compact_descriptors() {
    let reg = registry();
    let button = reg.get_type(-63).expect("Button");
    let same = reg.get_or_create(button.handle()).expect("by handle");
    assert!(Arc::ptr_eq(&button, &same));
    assert!(reg.is_known(button.handle()));
}

#[test]
fn handle_lookup_builds_compact_descriptor_first_time() {
    let reg = registry();
    let handle = reg.get_type(-258).expect("Grid").handle().clone();
    let fresh = registry();
    let grid = fresh.get_or_create(&handle).expect("Grid");
    assert_eq!(grid.id(), 258);
    assert!(Arc::ptr_eq(&grid, &fresh.get_type(-258).expect("Grid")));
}

#[test]
fn shadowing_name_is_rejected_and_synthesized() {
    let reg = registry();
    let fake = RuntimeType::builder("Plugin", "Plugin.Controls", "Button").build();
    let described = reg.get_or_create(&fake).expect("synthesized");
    assert_eq!(described.id(), 0);
    assert_eq!(described.origin(), DescriptorOrigin::Synthesized);
    assert_eq!(described.handle(), &fake);
    assert_eq!(reg.stats().rejected_collisions, 1);

    let real = reg.get_type(-63).expect("Button");
    assert!(!Arc::ptr_eq(&real, &described));
}

#[test]
fn extension_descriptor_instance_is_kept() {
    let gauge = widget("Gauge");
    let provided = Arc::new(
        TypeDescriptor::builder(gauge.clone())
            .content_property("Level")
            .default_constructor()
            .build(),
    );
    struct Fixed(Arc<TypeDescriptor>);
    impl TypeResolver for Fixed {
        fn try_resolve(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
            (name == self.0.name()).then(|| Arc::clone(&self.0))
        }
    }

    let reg = Registry::builder()
        .extension(Arc::new(Fixed(Arc::clone(&provided))))
        .build();
    let resolved = reg.get_or_create(&gauge).expect("extension");
    assert!(Arc::ptr_eq(&resolved, &provided));
    assert_eq!(reg.stats().extension_hits, 1);
    assert_eq!(reg.stats().synthesized, 0);
}

#[test]
fn extension_answer_with_wrong_handle_is_skipped() {
    let impostor = StaticTypeResolver::new("impostor")
        .with(TypeDescriptor::builder(RuntimeType::builder("Other", "Other", "Gauge").build()).build());
    let genuine = StaticTypeResolver::new("genuine")
        .with(TypeDescriptor::builder(widget("Gauge")).default_constructor().build());

    let reg = Registry::builder()
        .extension(Arc::new(impostor))
        .extension(Arc::new(genuine))
        .build();
    let resolved = reg.get_or_create(&widget("Gauge")).expect("genuine");
    assert_eq!(resolved.handle().module(), "App.Widgets");
    assert_eq!(resolved.origin(), DescriptorOrigin::Provided);
}

#[test]
fn compact_types_bypass_extensions() {
    let counting = Arc::new(CountingResolver {
        calls: AtomicUsize::new(0),
        inner: StaticTypeResolver::new("empty"),
    });
    let reg = Registry::builder().extension(counting.clone()).build();
    let style = reg.get_type(-601).expect("Style").handle().clone();
    reg.get_or_create(&style).expect("Style");
    reg.resolve_type_name("Style").expect("Style");
    assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn extension_name_fallback_can_be_disabled() {
    let resolver = StaticTypeResolver::new("widgets")
        .with(TypeDescriptor::builder(widget("Gauge")).build());
    let config = RegistryConfig::new().extension_name_fallback(false);
    let reg = Registry::builder()
        .config(config)
        .extension(Arc::new(resolver))
        .build();
    assert!(matches!(
        reg.resolve_type_name("Gauge"),
        Err(Error::NameNotFound(_))
    ));
    // Handle resolution still consults the chain.
    assert!(reg.get_or_create(&widget("Gauge")).is_ok());
}

#[test]
fn resolve_type_name_agrees_with_handle_lookup() {
    let resolver = StaticTypeResolver::new("widgets")
        .with(TypeDescriptor::builder(widget("Gauge")).build());
    let reg = Registry::builder().extension(Arc::new(resolver)).build();
    let by_name = reg.resolve_type_name("Gauge").expect("by name");
    let by_handle = reg.get_or_create(&widget("Gauge")).expect("by handle");
    assert!(Arc::ptr_eq(&by_name, &by_handle));
}

#[test]
fn published_host_types_resolve_by_name() {
    let reg = registry();
    let gauge = reg.describe(&widget("Gauge")).expect("Gauge");
    assert!(reg.is_known(gauge.handle()));
    let by_name = reg.resolve_type_name("Gauge").expect("by name");
    assert!(Arc::ptr_eq(&gauge, &by_name));
}

#[test]
fn extension_answers_by_name_are_cached() {
    let counting = Arc::new(CountingResolver {
        calls: AtomicUsize::new(0),
        inner: StaticTypeResolver::new("widgets")
            .with(TypeDescriptor::builder(widget("Gauge")).build()),
    });
    let reg = Registry::builder().extension(counting.clone()).build();
    let first = reg.resolve_type_name("Gauge").expect("Gauge");
    for _ in 0..4 {
        let again = reg.resolve_type_name("Gauge").expect("Gauge");
        assert!(Arc::ptr_eq(&first, &again));
    }
    assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    assert_eq!(reg.stats().extension_hits, 1);

    // The handle path sees the same published instance.
    let by_handle = reg.get_or_create(&widget("Gauge")).expect("Gauge");
    assert!(Arc::ptr_eq(&first, &by_handle));
    assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn registering_extension_later_is_visible() {
    let reg = registry();
    assert_eq!(reg.extension_count(), 0);
    reg.register_extension(Arc::new(
        StaticTypeResolver::new("late").with(TypeDescriptor::builder(widget("Dial")).build()),
    ));
    assert_eq!(reg.extension_count(), 1);
    assert_eq!(reg.resolve_type_name("Dial").expect("Dial").name(), "Dial");
}

// ============================================================================
// Synthesis
// ============================================================================

#[test]
fn ineligible_types_are_refused_and_not_cached() {
    let reg = registry();
    let cases = [
        (
            RuntimeType::builder("App", "App", "Descriptor").schema_type().build(),
            UnsupportedReason::SchemaType,
        ),
        (
            RuntimeType::builder("App", "App", "Box`1").open_generic().build(),
            UnsupportedReason::OpenGeneric,
        ),
        (
            RuntimeType::builder("App", "App", "Hidden").non_public().build(),
            UnsupportedReason::NotPublic,
        ),
        (
            RuntimeType::builder("App", "App", "Sealed").no_default_constructor().build(),
            UnsupportedReason::NoConstructor,
        ),
    ];
    for (handle, expected) in cases {
        match reg.get_or_create(&handle) {
            Err(Error::UnsupportedType { reason, .. }) => assert_eq!(reason, expected),
            other => panic!("expected refusal for {}, got {:?}", handle, other),
        }
        assert!(!reg.is_known(&handle));
    }
}

#[test]
fn abstract_without_constructor_is_eligible() {
    let reg = registry();
    let base = RuntimeType::builder("App", "App", "ShapeBase")
        .abstract_type()
        .no_default_constructor()
        .build();
    let described = reg.get_or_create(&base).expect("abstract");
    assert!(described.constructors().is_empty());
}

#[test]
fn synthesis_disabled_refuses_unknown_types() {
    let reg = Registry::builder()
        .config(RegistryConfig::new().allow_synthesis(false))
        .build();
    let err = reg.get_or_create(&widget("Gauge")).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedType {
            reason: UnsupportedReason::SynthesisDisabled,
            ..
        }
    ));
    // Compact types are unaffected.
    let grid = reg.get_type(-258).expect("Grid").handle().clone();
    assert!(reg.get_or_create(&grid).is_ok());
}

#[test]
fn synthesized_type_inherits_from_known_base() {
    let reg = registry();
    let panel = reg.get_type(-430).expect("Panel").handle().clone();
    let int32 = reg.get_type(-312).expect("Int32").handle().clone();
    let ring = RuntimeType::builder("App", "App.Layout", "RingPanel")
        .base(panel)
        .property("Spokes", int32.clone())
        .constructor(vec![int32], None)
        .build();

    let described = reg.get_or_create(&ring).expect("RingPanel");
    assert_eq!(described.origin(), DescriptorOrigin::Synthesized);
    assert_eq!(described.content_property(), Some("Children"));
    assert!(described.constructor(0).is_some());
    assert!(described.constructor(1).is_some());
    assert_eq!(reg.stats().synthesized, 1);

    let again = reg.get_or_create(&ring).expect("cached");
    assert!(Arc::ptr_eq(&described, &again));
    assert_eq!(reg.stats().synthesized, 1);
}

#[test]
fn synthesized_converter_maps_known_names() {
    let reg = registry();
    let swatch = RuntimeType::builder("App", "App", "Swatch")
        .converter("BrushConverter")
        .build();
    let custom = RuntimeType::builder("App", "App", "Fancy")
        .converter("App.FancyConverter")
        .build();
    assert_eq!(
        reg.get_or_create(&swatch).expect("Swatch").converter(),
        Some(&ConverterRef::Known(60))
    );
    assert_eq!(
        reg.get_or_create(&custom).expect("Fancy").converter(),
        Some(&ConverterRef::Named(Arc::from("App.FancyConverter")))
    );
}

// ============================================================================
// Reflected members
// ============================================================================

#[test]
fn reflected_members_are_cached_and_writable() {
    let reg = registry();
    let double = reg.get_type(-167).expect("Double").handle().clone();
    let gauge = RuntimeType::builder("App", "App", "Gauge")
        .property("Level", double.clone())
        .read_only_property("Peak", double)
        .build();
    let owner = reg.get_or_create(&gauge).expect("Gauge");

    let level = reg.describe_member(&owner, "Level").expect("Level");
    let again = reg.describe_member(&owner, "Level").expect("Level");
    assert!(Arc::ptr_eq(&level, &again));
    assert_eq!(level.id(), 0);
    assert!(matches!(
        level.accessor(),
        AccessorKind::Field { slot } if slot >= DYNAMIC_SLOT_BASE
    ));

    let mut instance = PropertyBag::new(gauge.clone());
    level
        .write(&mut instance, Value::Float(0.5), WriteOrigin::Code)
        .expect("write");
    assert_eq!(level.read(&instance).expect("read"), Value::Float(0.5));

    let peak = reg.describe_member(&owner, "Peak").expect("Peak");
    assert!(peak.is_read_only());
    assert!(matches!(
        peak.write(&mut instance, Value::Float(1.0), WriteOrigin::Deserializer),
        Err(Error::ReadOnlyMember(_))
    ));

    assert_eq!(
        reg.describe_member(&owner, "Missing").unwrap_err(),
        Error::NameNotFound("Gauge.Missing".into())
    );
}

#[test]
fn reflected_members_point_at_the_published_owner() {
    let reg = registry();
    let double = reg.get_type(-167).expect("Double").handle().clone();
    let gauge = RuntimeType::builder("App", "App", "Gauge")
        .property("Level", double)
        .build();
    // Built by the caller, never published.
    let loose = Arc::new(TypeDescriptor::builder(gauge.clone()).build());

    let level = reg.describe_member(&loose, "Level").expect("Level");
    let published = reg.get_or_create(&gauge).expect("Gauge");
    assert!(!Arc::ptr_eq(&loose, &published));
    assert!(Arc::ptr_eq(level.owner(), &published));

    let again = reg.describe_member(&published, "Level").expect("Level");
    assert!(Arc::ptr_eq(&level, &again));
}

#[test]
fn reflected_lookup_falls_back_to_known_base_members() {
    let reg = registry();
    let panel = reg.get_type(-430).expect("Panel").handle().clone();
    let ring = RuntimeType::builder("App", "App", "RingPanel").base(panel).build();
    let owner = reg.get_or_create(&ring).expect("RingPanel");

    let children = reg.describe_member(&owner, "Children").expect("Children");
    assert!(Arc::ptr_eq(&children, &reg.get_member(-177).expect("Panel.Children")));

    let width = reg.describe_member(&owner, "Width").expect("Width");
    assert_eq!(width.owner().name(), "FrameworkElement");
}

#[test]
fn base_declared_members_are_shared() {
    let reg = registry();
    let string = reg.get_type(-593).expect("String").handle().clone();
    let base = RuntimeType::builder("App", "App", "Labeled")
        .property("Label", string)
        .build();
    let derived = RuntimeType::builder("App", "App", "Tagged").base(base.clone()).build();

    let base_desc = reg.get_or_create(&base).expect("base");
    let derived_desc = reg.get_or_create(&derived).expect("derived");
    let via_derived = reg.describe_member(&derived_desc, "Label").expect("Label");
    let via_base = reg.describe_member(&base_desc, "Label").expect("Label");
    assert!(Arc::ptr_eq(&via_derived, &via_base));
    assert_eq!(via_derived.owner().name(), "Labeled");
}

#[test]
fn reflected_attached_members_use_their_own_namespace() {
    let reg = registry();
    let int32 = reg.get_type(-312).expect("Int32").handle().clone();
    let dock = RuntimeType::builder("App", "App", "Dock")
        .attached_property("Slot", int32)
        .build();
    let owner = reg.get_or_create(&dock).expect("Dock");
    assert!(reg.describe_member(&owner, "Slot").is_err());
    let slot = reg.describe_attached_member(&owner, "Slot").expect("Slot");
    assert!(slot.is_attachable());
}

#[test]
fn indirect_accessors_are_kept() {
    fn get_answer(_: &dyn Instance) -> crate::error::Result<Value> {
        Ok(Value::Int(42))
    }

    let reg = registry();
    let int32 = reg.get_type(-312).expect("Int32").handle().clone();
    let oracle = RuntimeType::builder("App", "App", "Oracle")
        .property_with_accessors("Answer", int32, get_answer, None)
        .build();
    let owner = reg.get_or_create(&oracle).expect("Oracle");
    let answer = reg.describe_member(&owner, "Answer").expect("Answer");
    assert!(answer.is_read_only());
    assert_eq!(answer.read(&PropertyBag::new(oracle)).expect("read"), Value::Int(42));
}

// ============================================================================
// Assemblies
// ============================================================================

#[test]
fn module_binding_is_cached() {
    let reg = registry();
    let button = reg.get_type(-63).expect("Button");
    let module = reg.module_of(&button).expect("bind").expect("compact");
    assert_eq!(module.name(), "Ui.Framework");
    let again = reg.module(AssemblyId::Framework).expect("bind");
    assert!(Arc::ptr_eq(&module, &again));

    let dynamic = reg.get_or_create(&widget("Gauge")).expect("Gauge");
    assert_eq!(reg.module_of(&dynamic).expect("no module"), None);
}

#[test]
fn failing_loader_surfaces_module_unavailable() {
    struct Offline;
    impl ModuleLoader for Offline {
        fn load(&self, _id: AssemblyId) -> core::result::Result<ModuleHandle, String> {
            Err("offline".into())
        }
    }
    let reg = Registry::builder().module_loader(Arc::new(Offline)).build();
    let err = reg.module(AssemblyId::Core).unwrap_err();
    assert_eq!(
        err,
        Error::ModuleUnavailable {
            id: -2,
            reason: "offline".into()
        }
    );
    // Descriptor lookups do not depend on module binding.
    assert!(reg.get_type(-566).is_ok());
}
