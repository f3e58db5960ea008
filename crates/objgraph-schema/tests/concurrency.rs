// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::cast_possible_truncation)] // Test parameters
#![allow(clippy::cast_possible_wrap)] // Test conversions
#![allow(clippy::missing_panics_doc)] // Tests/examples panic on failure

//! Concurrent resolution
//!
//! Many readers hitting the same registry must observe exactly one
//! descriptor per identity, and each descriptor must be built once.

use objgraph_schema::config::{MEMBER_ID_MAX, TYPE_ID_MAX};
use objgraph_schema::{Registry, RuntimeType, TypeDescriptor};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

fn race<T, F>(f: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(THREADS));
    let f = Arc::new(f);
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let f = Arc::clone(&f);
            thread::spawn(move || {
                barrier.wait();
                f()
            })
        })
        .collect();
    handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect()
}

fn all_same(results: &[Arc<TypeDescriptor>]) -> bool {
    results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1]))
}

#[test]
fn same_type_id_builds_once() {
    let registry = Arc::new(Registry::builder().build());
    let shared = Arc::clone(&registry);
    let results = race(move || shared.get_type(-258).expect("Grid"));

    assert!(all_same(&results));
    assert_eq!(registry.stats().type_builds, 1);
    assert_eq!(registry.published_types(), 1);
}

#[test]
fn same_member_id_builds_once() {
    let registry = Arc::new(Registry::builder().build());
    let shared = Arc::clone(&registry);
    let results = race(move || shared.get_member(-131).expect("Grid.Row"));

    assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(registry.stats().member_builds, 1);
    // The owner is built exactly once as well.
    assert_eq!(registry.stats().type_builds, 1);
}

#[test]
fn same_host_type_is_synthesized_once() {
    let registry = Arc::new(Registry::builder().build());
    let control = registry
        .resolve_type_name("Control")
        .expect("Control")
        .handle()
        .clone();
    let gauge = RuntimeType::builder("App.Widgets", "App.Widgets", "Gauge")
        .base(control)
        .build();

    let shared = Arc::clone(&registry);
    let results = race(move || shared.get_or_create(&gauge).expect("Gauge"));

    assert!(all_same(&results));
    assert_eq!(registry.stats().synthesized, 1);
}

#[test]
fn name_dispatch_races_agree() {
    let registry = Arc::new(Registry::builder().build());
    let shared = Arc::clone(&registry);
    let results = race(move || {
        let content = shared.resolve_member("Button", "Content").expect("Content");
        let row = shared.resolve_attached_member("Grid", "Row").expect("Row");
        (content, row)
    });

    let (content, row) = &results[0];
    for (c, r) in &results[1..] {
        assert!(Arc::ptr_eq(content, c));
        assert!(Arc::ptr_eq(row, r));
    }
    assert_eq!(content.id(), 47);
    assert_eq!(row.id(), 131);
}

#[test]
fn random_ids_match_a_sequential_pass() {
    let registry = Arc::new(Registry::builder().build());
    let shared = Arc::clone(&registry);
    let seeds: Vec<u64> = (0..THREADS as u64).collect();
    let seeds = Arc::new(parking_lot::Mutex::new(seeds));

    race(move || {
        let seed = seeds.lock().pop().expect("seed");
        let mut rng = fastrand::Rng::with_seed(seed);
        for _ in 0..2_000 {
            let t = -(rng.u16(1..=TYPE_ID_MAX) as i16);
            let m = -(rng.u16(1..=MEMBER_ID_MAX) as i16);
            shared.get_type(t).expect("type");
            shared.get_member(m).expect("member");
        }
    });

    // Whatever got published must be the descriptor every later caller sees.
    for magnitude in 1..=TYPE_ID_MAX as i16 {
        let first = registry.get_type(-magnitude).expect("type");
        let second = registry.get_type(-magnitude).expect("type");
        assert!(Arc::ptr_eq(&first, &second));
    }
    let stats = registry.stats();
    assert_eq!(stats.type_builds, u64::from(TYPE_ID_MAX));
    assert!(stats.member_builds <= u64::from(MEMBER_ID_MAX));
}

#[test]
fn reflected_members_share_one_descriptor() {
    let registry = Arc::new(Registry::builder().build());
    let double = registry
        .resolve_type_name("Double")
        .expect("Double")
        .handle()
        .clone();
    let gauge = RuntimeType::builder("App.Widgets", "App.Widgets", "Gauge")
        .property("Level", double)
        .build();
    let descriptor = registry.get_or_create(&gauge).expect("Gauge");

    let shared = Arc::clone(&registry);
    let results = race(move || shared.describe_member(&descriptor, "Level").expect("Level"));

    assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(registry.stats().dynamic_member_builds, 1);
}
