// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[test]
fn toast_expires_after_its_duration() {
    let ctx = setup();
    let id = ctx.manager.add(ToastOptions::success("saved").duration_ms(3000));

    ctx.clock.advance_ms(2999);
    assert_eq!(ctx.manager.fire_due(), 0);
    assert_eq!(ctx.manager.stats().visible, 1);

    ctx.clock.advance_ms(1);
    assert_eq!(ctx.manager.fire_due(), 1);
    assert!(ctx.manager.visible().is_empty());
    assert!(ctx.manager.remaining(id.as_str()).is_none());
}

#[test]
fn default_duration_comes_from_config() {
    let ctx = setup_with(ToastConfig {
        default_duration: Duration::from_millis(1500),
        ..ToastConfig::default()
    });
    let id = ctx.manager.add(ToastOptions::info("hi"));
    assert_eq!(ctx.manager.visible()[0].duration, Duration::from_millis(1500));
    assert_eq!(ctx.manager.remaining(id.as_str()), Some(Duration::from_millis(1500)));
}

#[test]
fn expiry_promotes_queued_toast_and_starts_its_timer() {
    let ctx = with_capacity(1);
    ctx.manager.add(ToastOptions::info("first").duration_ms(1000));
    let second = ctx.manager.add(ToastOptions::info("second").duration_ms(1000));

    // Queued toasts do not count down.
    ctx.clock.advance_ms(1000);
    assert_eq!(ctx.manager.remaining(second.as_str()), None);
    assert_eq!(ctx.manager.fire_due(), 1);

    assert_eq!(titles(&ctx.manager.visible()), ["second"]);
    assert_eq!(
        ctx.manager.remaining(second.as_str()),
        Some(Duration::from_millis(1000))
    );
}

#[test]
fn sticky_toast_never_expires() {
    let ctx = setup();
    let id = ctx.manager.add(ToastOptions::warning("offline").sticky());

    ctx.clock.advance(Duration::from_secs(3600));
    assert_eq!(ctx.manager.fire_due(), 0);
    assert_eq!(ctx.manager.stats().visible, 1);
    assert!(ctx.manager.next_deadline().is_none());

    // Pausing something without a countdown is a no-op.
    ctx.manager.pause(id.as_str());
    assert!(!ctx.manager.is_paused(id.as_str()));
    assert_eq!(ctx.manager.remaining(id.as_str()), None);
}

#[test]
fn pause_keeps_remaining_time() {
    let ctx = setup();
    let id = ctx.manager.add(ToastOptions::info("upload").duration_ms(10_000));

    ctx.clock.advance_ms(3000);
    ctx.manager.pause(id.as_str());
    assert!(ctx.manager.is_paused(id.as_str()));
    assert_eq!(
        ctx.manager.remaining(id.as_str()),
        Some(Duration::from_millis(7000))
    );

    // Time spent paused does not count.
    ctx.clock.advance_ms(60_000);
    assert_eq!(ctx.manager.fire_due(), 0);

    ctx.manager.resume(id.as_str());
    assert!(!ctx.manager.is_paused(id.as_str()));
    ctx.clock.advance_ms(6999);
    assert_eq!(ctx.manager.fire_due(), 0);
    ctx.clock.advance_ms(1);
    assert_eq!(ctx.manager.fire_due(), 1);
}

#[test]
fn double_pause_and_double_resume_are_idempotent() {
    let ctx = setup();
    let id = ctx.manager.add(ToastOptions::info("x").duration_ms(4000));

    ctx.clock.advance_ms(1000);
    ctx.manager.pause(id.as_str());
    ctx.clock.advance_ms(1000);
    ctx.manager.pause(id.as_str());
    assert_eq!(
        ctx.manager.remaining(id.as_str()),
        Some(Duration::from_millis(3000))
    );

    ctx.manager.resume(id.as_str());
    ctx.clock.advance_ms(1000);
    ctx.manager.resume(id.as_str());
    assert_eq!(
        ctx.manager.remaining(id.as_str()),
        Some(Duration::from_millis(2000))
    );
}

#[test]
fn resume_without_pause_does_not_reset_countdown() {
    let ctx = setup();
    let id = ctx.manager.add(ToastOptions::info("x").duration_ms(5000));
    ctx.clock.advance_ms(2000);
    ctx.manager.resume(id.as_str());
    ctx.clock.advance_ms(3000);
    assert_eq!(ctx.manager.fire_due(), 1);
}

#[test]
fn pause_after_deadline_still_expires_toast() {
    let ctx = with_capacity(1);
    let id = ctx.manager.add(ToastOptions::info("x").duration_ms(5000));
    ctx.manager.add(ToastOptions::info("next").duration_ms(5000));

    // Due but not yet fired.
    ctx.clock.advance_ms(5000);
    ctx.manager.pause(id.as_str());
    assert!(!ctx.manager.is_paused(id.as_str()));
    ctx.manager.resume(id.as_str());
    assert!(ctx.manager.next_deadline().is_some());

    ctx.clock.advance_ms(600_000);
    assert_eq!(ctx.manager.fire_due(), 1);
    assert_eq!(titles(&ctx.manager.visible()), ["next"]);
}

#[test]
fn pause_all_after_deadline_leaves_due_toasts_to_fire() {
    let ctx = setup();
    let due = ctx.manager.add(ToastOptions::info("due").duration_ms(1000));
    let later = ctx.manager.add(ToastOptions::info("later").duration_ms(9000));

    ctx.clock.advance_ms(1000);
    ctx.manager.pause_all();
    assert!(!ctx.manager.is_paused(due.as_str()));
    assert!(ctx.manager.is_paused(later.as_str()));

    assert_eq!(ctx.manager.fire_due(), 1);
    assert_eq!(titles(&ctx.manager.visible()), ["later"]);
}

#[test]
fn pause_and_resume_unknown_ids_are_noops() {
    let ctx = setup();
    ctx.manager.pause("missing");
    ctx.manager.resume("missing");
    assert!(!ctx.manager.is_paused("missing"));
}

#[test]
fn dismissing_paused_toast_forgets_its_countdown() {
    let ctx = setup();
    let id = ctx.manager.add(ToastOptions::info("x").duration_ms(5000));
    ctx.manager.pause(id.as_str());
    ctx.manager.dismiss(id.as_str());

    ctx.manager.resume(id.as_str());
    assert!(ctx.manager.next_deadline().is_none());
    assert!(ctx.manager.visible().is_empty());
}

#[test]
fn pause_all_and_resume_all_cover_every_visible_toast() {
    let ctx = with_capacity(2);
    let a = ctx.manager.add(ToastOptions::info("a").duration_ms(2000));
    let b = ctx.manager.add(ToastOptions::info("b").duration_ms(4000));
    let queued = ctx.manager.add(ToastOptions::info("c").duration_ms(1000));

    ctx.clock.advance_ms(1000);
    ctx.manager.pause_all();
    assert!(ctx.manager.is_paused(a.as_str()));
    assert!(ctx.manager.is_paused(b.as_str()));
    assert!(!ctx.manager.is_paused(queued.as_str()));
    assert!(ctx.manager.next_deadline().is_none());

    ctx.clock.advance_ms(10_000);
    ctx.manager.resume_all();
    ctx.clock.advance_ms(1000);
    assert_eq!(ctx.manager.fire_due(), 1);
    assert_eq!(titles(&ctx.manager.visible()), ["b", "c"]);
}

#[test]
fn next_deadline_is_earliest_running_timer() {
    let ctx = setup();
    let start = ctx.clock.now();
    ctx.manager.add(ToastOptions::info("slow").duration_ms(9000));
    ctx.manager.add(ToastOptions::info("fast").duration_ms(2000));
    assert_eq!(
        ctx.manager.next_deadline(),
        Some(start + Duration::from_millis(2000))
    );
}

#[test]
fn simultaneous_expiry_fires_together() {
    let ctx = setup();
    for title in ["a", "b", "c"] {
        ctx.manager.add(ToastOptions::info(title).duration_ms(500));
    }
    ctx.clock.advance_ms(500);
    assert_eq!(ctx.manager.fire_due(), 3);
    assert!(ctx.manager.visible().is_empty());
}

#[test]
fn invoke_action_runs_callback_and_dismisses() {
    let ctx = setup();
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    let id = ctx.manager.add(
        ToastOptions::error("delete failed").action(ToastAction::new("Retry", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
    );

    assert!(ctx.manager.invoke_action(id.as_str()));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert!(ctx.manager.visible().is_empty());

    assert!(!ctx.manager.invoke_action(id.as_str()));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn invoke_action_without_action_is_false() {
    let ctx = setup();
    let id = ctx.manager.add(ToastOptions::info("plain"));
    assert!(!ctx.manager.invoke_action(id.as_str()));
    assert_eq!(ctx.manager.stats().visible, 1);
}

#[test]
fn action_may_add_toasts() {
    let ctx = Arc::new(setup());
    let inner = Arc::clone(&ctx);
    let id = ctx.manager.add(
        ToastOptions::info("undo?").action(ToastAction::new("Undo", move || {
            inner.manager.add(ToastOptions::success("restored"));
        })),
    );
    assert!(ctx.manager.invoke_action(id.as_str()));
    assert_eq!(titles(&ctx.manager.visible()), ["restored"]);
}
