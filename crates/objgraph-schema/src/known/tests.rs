// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::names::{bucket_of, name_hash};
use super::*;
use crate::descriptor::DescriptorOrigin;
use std::collections::HashSet;

// ============================================================================
// Table integrity
// ============================================================================

#[test]
fn type_names_are_unique() {
    let mut seen = HashSet::new();
    for record in KNOWN_TYPES.iter() {
        assert!(seen.insert(record.name), "duplicate type {}", record.name);
    }
}

#[test]
fn type_references_stay_in_range() {
    for (i, record) in KNOWN_TYPES.iter().enumerate() {
        let id = i as u16 + 1;
        assert!(record.base <= TYPE_ID_MAX, "{} base", record.name);
        assert_ne!(record.base, id, "{} is its own base", record.name);
        assert!(record.converter <= TYPE_ID_MAX, "{} converter", record.name);
        for overload in record.constructors {
            for &arg in overload.iter() {
                assert!((1..=TYPE_ID_MAX).contains(&arg), "{} ctor arg", record.name);
            }
        }
    }
}

#[test]
fn every_base_chain_reaches_the_root() {
    let root = type_id("Object").expect("root type");
    for (i, record) in KNOWN_TYPES.iter().enumerate() {
        let mut current = i as u16 + 1;
        let mut steps = 0;
        while known_type(current).base != 0 {
            current = known_type(current).base;
            steps += 1;
            assert!(steps < 64, "base cycle through {}", record.name);
        }
        assert_eq!(current, root, "{} does not reach Object", record.name);
    }
}

#[test]
fn members_sorted_by_owner_then_name() {
    for pair in KNOWN_MEMBERS.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            (a.owner, a.name) < (b.owner, b.name),
            "{}.{} out of order",
            known_type(b.owner).name,
            b.name
        );
    }
    for pair in EXTRA_MEMBERS.windows(2) {
        assert!((pair[0].owner, pair[0].name) < (pair[1].owner, pair[1].name));
    }
}

#[test]
fn member_references_stay_in_range() {
    for record in KNOWN_MEMBERS.iter().chain(EXTRA_MEMBERS.iter()) {
        assert!((1..=TYPE_ID_MAX).contains(&record.owner), "{}", record.name);
        assert!((1..=TYPE_ID_MAX).contains(&record.value_type), "{}", record.name);
        assert!(record.converter <= TYPE_ID_MAX, "{}", record.name);
    }
}

#[test]
fn extras_do_not_shadow_compact_members() {
    for extra in EXTRA_MEMBERS.iter() {
        let clash = KNOWN_MEMBERS
            .iter()
            .any(|m| m.owner == extra.owner && m.name == extra.name);
        assert!(!clash, "extra {} duplicates a compact member", extra.name);
    }
}

// ============================================================================
// Name dispatch
// ============================================================================

#[test]
fn hash_is_bounded_to_prefix() {
    assert_eq!(name_hash(""), 0);
    assert_eq!(name_hash("A"), 'A' as u32);
    assert_eq!(name_hash("AB"), ('A' as u32) * 101 + 'B' as u32);
    assert_eq!(
        name_hash("FrameworkElement"),
        name_hash("FrameworkElementFactory")
    );
}

#[test]
fn colliding_prefixes_resolve_exactly() {
    let bucket = bucket_of("FrameworkElement");
    assert!(bucket.len() >= 2);

    let element = type_id("FrameworkElement").expect("element");
    let factory = type_id("FrameworkElementFactory").expect("factory");
    assert_ne!(element, factory);
    assert_eq!(known_type(element).name, "FrameworkElement");
    assert_eq!(known_type(factory).name, "FrameworkElementFactory");

    // Same bucket, not in the table.
    assert_eq!(type_id("FrameworkElementX"), None);
    assert_eq!(type_id("DoubleAnimationUsingPath"), Some(171));
    assert_eq!(type_id("DoubleAnimation"), Some(168));
}

#[test]
fn every_type_name_dispatches_to_itself() {
    for (i, record) in KNOWN_TYPES.iter().enumerate() {
        assert_eq!(type_id(record.name), Some(i as u16 + 1), "{}", record.name);
    }
}

#[test]
fn member_dispatch_walks_base_types() {
    // Declared directly.
    assert_eq!(member_route("Setter", "Value", false), Some(MemberRoute::Known(209)));
    // Button -> ButtonBase -> ContentControl.
    assert_eq!(member_route("Button", "Content", false), Some(MemberRoute::Known(47)));
    // Grid -> Panel.
    assert_eq!(member_route("Grid", "Children", false), Some(MemberRoute::Known(177)));
    assert_eq!(member_route("Grid", "NoSuchMember", false), None);
    assert_eq!(member_route("NoSuchOwner", "Content", false), None);
}

#[test]
fn attached_and_instance_namespaces_are_disjoint() {
    assert_eq!(member_route("Grid", "Row", true), Some(MemberRoute::Known(131)));
    assert_eq!(member_route("Grid", "Row", false), None);
    assert_eq!(member_route("Setter", "Value", true), None);
}

#[test]
fn extras_follow_compact_members() {
    assert_eq!(member_route("Button", "IsCancel", false), Some(MemberRoute::Extra(0)));
    // Slider inherits RangeBase.Value from the extras.
    let value = EXTRA_MEMBERS
        .iter()
        .position(|m| m.owner == 493 && m.name == "Value")
        .expect("RangeBase.Value");
    assert_eq!(member_route("Slider", "Value", false), Some(MemberRoute::Extra(value)));
}

// ============================================================================
// Descriptor construction
// ============================================================================

#[test]
fn built_type_carries_table_metadata() {
    let style = build_type(type_id("Style").expect("Style"));
    assert_eq!(style.name(), "Style");
    assert_eq!(style.id(), 601);
    assert_eq!(style.wire_id(), Some(-601));
    assert_eq!(style.origin(), DescriptorOrigin::Known);
    assert_eq!(style.content_property(), Some("Setters"));
    assert_eq!(style.dictionary_key_property(), Some("TargetType"));
    assert!(style.usable_before_init());
    assert_eq!(style.assembly(), Some(AssemblyId::Framework));
    assert_eq!(style.handle().module(), "Ui.Framework");
    assert!(style.constructor(0).is_some());
}

#[test]
fn built_type_defaults_and_converters() {
    let boolean = build_type(49);
    assert_eq!(boolean.name(), "Boolean");
    assert_eq!(boolean.default_value(), Some(Value::Bool(false)));

    let string = build_type(593);
    assert_eq!(string.converter(), Some(&ConverterRef::Known(596)));
    assert!(string.constructor(0).is_none());
    assert_eq!(string.default_value(), Some(Value::Null));
}

#[test]
fn abstract_types_have_no_default_constructor() {
    let block = build_type(type_id("Adorner").expect("Adorner"));
    assert!(block.constructor(0).is_none());
}

#[test]
fn positional_overloads_resolve_argument_types() {
    let binding = build_type(25);
    let path = binding.constructor(1).expect("Binding(String)");
    assert_eq!(path.arguments()[0].name(), "String");
}

#[test]
fn handles_share_one_allocation_and_chain_bases() {
    let a = handle(63);
    let b = handle(63);
    assert!(a.ptr_eq(&b));

    let chain: Vec<&str> = a.ancestry().map(TypeHandle::name).collect();
    assert_eq!(chain[..3], ["Button", "ButtonBase", "ContentControl"]);
    assert_eq!(chain.last(), Some(&"Object"));
}

#[test]
fn built_member_uses_wire_id_as_slot() {
    let owner = Arc::new(build_type(258));
    let row = build_member(131, owner);
    assert_eq!(row.qualified_name(), "Grid.Row");
    assert!(row.is_attachable());
    assert_eq!(row.value_type().name(), "Int32");
    assert!(matches!(row.accessor(), AccessorKind::Field { slot: 131 }));
}

#[test]
fn built_extra_member_has_no_wire_id() {
    let owner = Arc::new(build_type(63));
    let cancel = build_extra_member(0, owner);
    assert_eq!(cancel.id(), 0);
    assert_eq!(cancel.wire_id(), None);
    assert_eq!(cancel.name(), "IsCancel");
    assert!(matches!(
        cancel.accessor(),
        AccessorKind::Field { slot } if slot > u32::from(MEMBER_ID_MAX)
    ));
}
