// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use parking_lot::Mutex;
use sk_adapters::FakeAnnouncer;
use sk_core::{FakeClock, SequentialIdGen, ToastAction, ToastVariant};
use std::sync::Arc;

mod announce;
mod queue;
mod subscribe;
mod timers;

type TestManager = ToastManager<FakeAnnouncer, FakeClock, SequentialIdGen>;

struct TestContext {
    manager: TestManager,
    announcer: FakeAnnouncer,
    clock: FakeClock,
}

fn setup() -> TestContext {
    setup_with(ToastConfig::default())
}

fn setup_with(config: ToastConfig) -> TestContext {
    let announcer = FakeAnnouncer::new();
    let clock = FakeClock::new();
    let manager = ToastManager::new(
        announcer.clone(),
        clock.clone(),
        SequentialIdGen::default(),
        config,
    );
    TestContext {
        manager,
        announcer,
        clock,
    }
}

fn with_capacity(max_visible: usize) -> TestContext {
    setup_with(ToastConfig {
        max_visible,
        ..ToastConfig::default()
    })
}

fn titles(toasts: &[Toast]) -> Vec<String> {
    toasts.iter().map(|t| t.title.clone()).collect()
}

/// Record every broadcast the manager makes
fn record<A: AnnounceAdapter>(
    manager: &ToastManager<A, FakeClock, SequentialIdGen>,
) -> (Arc<Mutex<Vec<Vec<String>>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = manager.subscribe(move |visible| sink.lock().push(titles(visible)));
    (seen, subscription)
}

#[test]
fn new_manager_is_empty() {
    let ctx = setup();
    assert_eq!(
        ctx.manager.stats(),
        ToastStats {
            visible: 0,
            queued: 0,
            max_visible: 3
        }
    );
    assert!(ctx.manager.next_deadline().is_none());
    assert!(ctx.announcer.calls().is_empty());
}

#[test]
fn zero_capacity_in_config_is_raised_to_one() {
    let ctx = with_capacity(0);
    assert_eq!(ctx.manager.stats().max_visible, 1);
}

#[test]
fn ids_come_from_the_generator() {
    let ctx = setup();
    let first = ctx.manager.add(ToastOptions::success("a"));
    let second = ctx.manager.add(ToastOptions::info("b"));
    assert_eq!(first, "toast-1");
    assert_eq!(second, "toast-2");
    assert_eq!(ctx.manager.visible()[1].variant, ToastVariant::Info);
}
