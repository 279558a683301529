// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::Barrier;

#[test]
fn subscribe_delivers_current_list_immediately() {
    let ctx = setup();
    ctx.manager.add(ToastOptions::info("already here"));

    let (seen, _subscription) = record(&ctx.manager);

    assert_eq!(*seen.lock(), vec![vec!["already here".to_string()]]);
    assert_eq!(ctx.manager.subscriber_count(), 1);
}

#[test]
fn each_change_is_broadcast_once() {
    let ctx = with_capacity(1);
    let (seen, _subscription) = record(&ctx.manager);

    let first = ctx.manager.add(ToastOptions::info("a"));
    ctx.manager.add(ToastOptions::info("b"));
    ctx.manager.dismiss(first.as_str());

    assert_eq!(
        *seen.lock(),
        vec![
            Vec::<String>::new(),
            vec!["a".to_string()],
            vec!["b".to_string()],
        ]
    );
}

#[test]
fn queueing_does_not_broadcast() {
    let ctx = with_capacity(1);
    ctx.manager.add(ToastOptions::info("a"));
    let (seen, _subscription) = record(&ctx.manager);

    ctx.manager.add(ToastOptions::info("b"));
    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn expiry_and_dismiss_all_broadcast() {
    let ctx = setup();
    let (seen, _subscription) = record(&ctx.manager);
    ctx.manager.add(ToastOptions::info("a").duration_ms(100));
    ctx.manager.add(ToastOptions::info("b").sticky());

    ctx.clock.advance_ms(100);
    ctx.manager.fire_due();
    ctx.manager.dismiss_all();

    let seen = seen.lock();
    assert_eq!(seen.len(), 5);
    assert_eq!(seen[3], ["b"]);
    assert!(seen[4].is_empty());
}

#[test]
fn dismissing_unknown_id_still_broadcasts() {
    let ctx = setup();
    let (seen, _subscription) = record(&ctx.manager);
    ctx.manager.dismiss("nope");
    assert_eq!(seen.lock().len(), 2);
}

#[test]
fn set_max_toasts_broadcasts_only_on_promotion() {
    let ctx = with_capacity(1);
    ctx.manager.add(ToastOptions::info("a"));
    ctx.manager.add(ToastOptions::info("b"));
    let (seen, _subscription) = record(&ctx.manager);

    ctx.manager.set_max_toasts(1);
    assert_eq!(seen.lock().len(), 1);

    ctx.manager.set_max_toasts(2);
    assert_eq!(seen.lock().last().cloned(), Some(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn unsubscribe_stops_updates() {
    let ctx = setup();
    let (seen, subscription) = record(&ctx.manager);
    subscription.unsubscribe();
    assert_eq!(ctx.manager.subscriber_count(), 0);

    ctx.manager.add(ToastOptions::info("unseen"));
    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn subscribers_are_notified_in_subscription_order() {
    let ctx = setup();
    let order = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&order);
    let second = Arc::clone(&order);
    let _a = ctx.manager.subscribe(move |_| first.lock().push("first"));
    let _b = ctx.manager.subscribe(move |_| second.lock().push("second"));
    order.lock().clear();

    ctx.manager.add(ToastOptions::info("x"));
    assert_eq!(*order.lock(), ["first", "second"]);
}

#[test]
fn callback_may_call_back_into_manager() {
    let ctx = Arc::new(setup());
    let inner = Arc::clone(&ctx);
    let _subscription = ctx.manager.subscribe(move |visible| {
        // Reading state from inside a broadcast must not deadlock.
        assert_eq!(inner.manager.stats().visible, visible.len());
    });
    ctx.manager.add(ToastOptions::info("x"));
    ctx.manager.dismiss_all();
}

#[test]
fn subscription_outliving_manager_unsubscribes_quietly() {
    let ctx = setup();
    let (_seen, subscription) = record(&ctx.manager);
    drop(ctx);
    subscription.unsubscribe();
}

/// Announcer that parks the announcing thread until the test lets it go
#[derive(Clone)]
struct GateAnnouncer {
    entered: Arc<Barrier>,
    release: Arc<Barrier>,
}

impl GateAnnouncer {
    fn new() -> Self {
        Self {
            entered: Arc::new(Barrier::new(2)),
            release: Arc::new(Barrier::new(2)),
        }
    }
}

impl AnnounceAdapter for GateAnnouncer {
    fn announce(&self, _message: &str, _politeness: Politeness) {
        self.entered.wait();
        self.release.wait();
    }
}

#[test]
fn overlapping_changes_never_deliver_an_older_list() {
    let gate = GateAnnouncer::new();
    let manager = ToastManager::new(
        gate.clone(),
        FakeClock::new(),
        SequentialIdGen::default(),
        ToastConfig::default(),
    );
    let (seen, _subscription) = record(&manager);

    std::thread::scope(|s| {
        // `add` finishes its critical section, then blocks announcing.
        let adding = s.spawn(|| manager.add(ToastOptions::info("x")));
        gate.entered.wait();
        manager.dismiss("toast-1");
        gate.release.wait();
        assert!(adding.join().is_ok());
    });

    assert!(manager.visible().is_empty());
    assert_eq!(*seen.lock(), vec![Vec::<String>::new(), Vec::new()]);
}

#[test]
fn change_made_inside_a_callback_is_the_last_list_delivered() {
    let ctx = Arc::new(setup());
    let inner = Arc::clone(&ctx);
    let _dismisser = ctx.manager.subscribe(move |visible| {
        if let Some(toast) = visible.first() {
            inner.manager.dismiss(toast.id.as_str());
        }
    });
    let (seen, _subscription) = record(&ctx.manager);

    ctx.manager.add(ToastOptions::info("x"));

    assert!(ctx.manager.visible().is_empty());
    assert_eq!(*seen.lock(), vec![Vec::<String>::new(), Vec::new()]);
}
