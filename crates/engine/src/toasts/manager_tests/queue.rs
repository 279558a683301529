// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[test]
fn add_shows_until_capacity_then_queues() {
    let ctx = with_capacity(2);
    ctx.manager.add(ToastOptions::success("one"));
    ctx.manager.add(ToastOptions::success("two"));
    ctx.manager.add(ToastOptions::success("three"));

    assert_eq!(titles(&ctx.manager.visible()), ["one", "two"]);
    assert_eq!(titles(&ctx.manager.queued()), ["three"]);
}

#[test]
fn errors_jump_the_queue() {
    let ctx = with_capacity(1);
    ctx.manager.add(ToastOptions::success("saved"));
    ctx.manager.add(ToastOptions::info("syncing"));
    ctx.manager.add(ToastOptions::error("sync failed"));

    assert_eq!(titles(&ctx.manager.visible()), ["saved"]);
    assert_eq!(titles(&ctx.manager.queued()), ["sync failed", "syncing"]);
}

#[test]
fn later_error_goes_ahead_of_earlier_error() {
    let ctx = with_capacity(1);
    ctx.manager.add(ToastOptions::info("busy"));
    ctx.manager.add(ToastOptions::error("first"));
    ctx.manager.add(ToastOptions::warning("careful"));
    ctx.manager.add(ToastOptions::error("second"));

    assert_eq!(
        titles(&ctx.manager.queued()),
        ["second", "first", "careful"]
    );
}

#[test]
fn error_is_shown_directly_when_there_is_room() {
    let ctx = setup();
    ctx.manager.add(ToastOptions::info("a"));
    ctx.manager.add(ToastOptions::error("b"));
    assert_eq!(titles(&ctx.manager.visible()), ["a", "b"]);
    assert!(ctx.manager.queued().is_empty());
}

#[test]
fn dismiss_promotes_from_queue_front() {
    let ctx = with_capacity(1);
    let first = ctx.manager.add(ToastOptions::success("first"));
    ctx.manager.add(ToastOptions::success("second"));
    ctx.manager.add(ToastOptions::success("third"));

    ctx.manager.dismiss(first.as_str());

    assert_eq!(titles(&ctx.manager.visible()), ["second"]);
    assert_eq!(titles(&ctx.manager.queued()), ["third"]);
}

#[test]
fn dismiss_removes_queued_toast() {
    let ctx = with_capacity(1);
    ctx.manager.add(ToastOptions::success("shown"));
    let waiting = ctx.manager.add(ToastOptions::success("waiting"));

    ctx.manager.dismiss(waiting.as_str());

    assert_eq!(titles(&ctx.manager.visible()), ["shown"]);
    assert!(ctx.manager.queued().is_empty());
}

#[test]
fn dismiss_twice_or_unknown_is_harmless() {
    let ctx = setup();
    let id = ctx.manager.add(ToastOptions::success("once"));
    ctx.manager.add(ToastOptions::success("kept"));

    ctx.manager.dismiss(id.as_str());
    ctx.manager.dismiss(id.as_str());
    ctx.manager.dismiss("never-issued");

    assert_eq!(titles(&ctx.manager.visible()), ["kept"]);
    assert_eq!(ctx.manager.stats().queued, 0);
}

#[test]
fn dismiss_all_clears_everything() {
    let ctx = with_capacity(1);
    for title in ["a", "b", "c"] {
        ctx.manager.add(ToastOptions::info(title));
    }

    ctx.manager.dismiss_all();

    assert_eq!(
        ctx.manager.stats(),
        ToastStats {
            visible: 0,
            queued: 0,
            max_visible: 1
        }
    );
    assert!(ctx.manager.next_deadline().is_none());
}

#[test]
fn growing_capacity_promotes_immediately() {
    let ctx = with_capacity(1);
    for title in ["a", "b", "c", "d"] {
        ctx.manager.add(ToastOptions::info(title));
    }

    ctx.manager.set_max_toasts(3);

    assert_eq!(titles(&ctx.manager.visible()), ["a", "b", "c"]);
    assert_eq!(titles(&ctx.manager.queued()), ["d"]);
    assert_eq!(ctx.manager.stats().max_visible, 3);
}

#[test]
fn shrinking_capacity_keeps_visible_toasts() {
    let ctx = setup();
    for title in ["a", "b", "c"] {
        ctx.manager.add(ToastOptions::info(title));
    }

    ctx.manager.set_max_toasts(1);
    assert_eq!(ctx.manager.stats().visible, 3);

    ctx.manager.add(ToastOptions::info("d"));
    assert_eq!(titles(&ctx.manager.queued()), ["d"]);

    // Dismissals drain the excess before anything is promoted.
    let ids: Vec<_> = ctx.manager.visible().iter().map(|t| t.id.clone()).collect();
    ctx.manager.dismiss(ids[0].as_str());
    assert_eq!(titles(&ctx.manager.visible()), ["b", "c"]);
    ctx.manager.dismiss(ids[1].as_str());
    ctx.manager.dismiss(ids[2].as_str());
    assert_eq!(titles(&ctx.manager.visible()), ["d"]);
}

#[test]
fn zero_capacity_is_clamped() {
    let ctx = setup();
    ctx.manager.set_max_toasts(0);
    assert_eq!(ctx.manager.stats().max_visible, 1);
}

#[derive(Debug, Clone)]
enum Op {
    Add(ToastVariant),
    DismissVisible(usize),
    DismissQueued(usize),
    SetMax(usize),
    Expire(u64),
}

fn op() -> impl Strategy<Value = Op> {
    let variant = prop_oneof![
        Just(ToastVariant::Success),
        Just(ToastVariant::Error),
        Just(ToastVariant::Warning),
        Just(ToastVariant::Info),
    ];
    prop_oneof![
        4 => variant.prop_map(Op::Add),
        2 => (0usize..6).prop_map(Op::DismissVisible),
        1 => (0usize..6).prop_map(Op::DismissQueued),
        1 => (1usize..5).prop_map(Op::SetMax),
        1 => (0u64..8000).prop_map(Op::Expire),
    ]
}

proptest! {
    #[test]
    fn capacity_and_queue_invariants_hold(ops in proptest::collection::vec(op(), 1..60)) {
        let ctx = with_capacity(2);
        let mut capacity = 2;
        let mut seen = std::collections::HashSet::new();

        for op in ops {
            match op {
                Op::Add(variant) => {
                    let before = ctx.manager.stats();
                    let id = ctx.manager.add(ToastOptions::new(variant, "t"));
                    prop_assert!(seen.insert(id.clone()));
                    if before.visible < capacity {
                        prop_assert!(ctx.manager.visible().iter().any(|t| t.id == id));
                    } else {
                        let queued = ctx.manager.queued();
                        let slot = if variant.is_error() { queued.first() } else { queued.last() };
                        prop_assert_eq!(slot.map(|t| t.id.clone()), Some(id));
                    }
                }
                Op::DismissVisible(i) => {
                    if let Some(t) = ctx.manager.visible().get(i) {
                        ctx.manager.dismiss(t.id.as_str());
                    }
                }
                Op::DismissQueued(i) => {
                    if let Some(t) = ctx.manager.queued().get(i) {
                        ctx.manager.dismiss(t.id.as_str());
                    }
                }
                Op::SetMax(n) => {
                    capacity = n;
                    ctx.manager.set_max_toasts(n);
                }
                Op::Expire(ms) => {
                    ctx.clock.advance_ms(ms);
                    ctx.manager.fire_due();
                }
            }

            let stats = ctx.manager.stats();
            // A queued toast implies the visible list is full.
            if stats.queued > 0 {
                prop_assert!(stats.visible >= capacity);
            }
            let visible = ctx.manager.visible();
            let queued = ctx.manager.queued();
            prop_assert!(visible.iter().all(|v| queued.iter().all(|q| q.id != v.id)));
        }
    }
}
