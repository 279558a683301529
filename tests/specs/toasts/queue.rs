//! Queue and capacity specs

use crate::prelude::*;

#[test]
fn visible_count_never_exceeds_capacity() {
    for max_visible in 1..=4 {
        let t = toasts(max_visible);
        for i in 0..10 {
            t.manager.add(ToastOptions::info(format!("toast {i}")));
            assert!(t.manager.stats().visible <= max_visible);
        }
        assert_eq!(t.manager.stats().queued, 10 - max_visible);
    }
}

#[test]
fn error_jumps_to_the_front_of_the_queue() {
    let t = toasts(1);
    t.manager.add(ToastOptions::success("saved"));
    t.manager.add(ToastOptions::info("fyi"));
    t.manager.add(ToastOptions::error("broken"));

    assert_eq!(titles(&t.manager.queued()), ["broken", "fyi"]);
}

#[test]
fn dismiss_promotes_exactly_one_queued_toast() {
    let t = toasts(2);
    let first = t.manager.add(ToastOptions::info("a"));
    t.manager.add(ToastOptions::info("b"));
    t.manager.add(ToastOptions::info("c"));
    t.manager.add(ToastOptions::info("d"));

    t.manager.dismiss(first.as_str());

    let stats = t.manager.stats();
    assert_eq!(stats.visible, 2);
    assert_eq!(stats.queued, 1);
    assert_eq!(titles(&t.manager.visible()), ["b", "c"]);
}

#[test]
fn repeated_and_unknown_dismiss_leave_state_unchanged() {
    let t = toasts(1);
    let id = t.manager.add(ToastOptions::info("a"));
    t.manager.add(ToastOptions::info("b"));

    t.manager.dismiss(id.as_str());
    let after_first = (titles(&t.manager.visible()), t.manager.stats());
    t.manager.dismiss(id.as_str());
    t.manager.dismiss("does-not-exist");

    assert_eq!((titles(&t.manager.visible()), t.manager.stats()), after_first);
}

#[test]
fn dismiss_all_empties_everything() {
    let t = toasts(2);
    for i in 0..5 {
        t.manager.add(ToastOptions::warning(format!("w{i}")));
    }
    t.manager.dismiss_all();

    let stats = t.manager.stats();
    assert_eq!((stats.visible, stats.queued), (0, 0));
}
