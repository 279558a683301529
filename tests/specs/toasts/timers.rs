//! Countdown specs

use crate::prelude::*;
use std::time::Duration;

#[test]
fn paused_toast_resumes_with_remaining_time() {
    let t = toasts(3);
    let id = t
        .manager
        .add(ToastOptions::info("uploading").duration(Duration::from_millis(10_000)));

    t.clock.advance_ms(3000);
    t.manager.pause(id.as_str());
    t.clock.advance_ms(30_000);
    t.manager.resume(id.as_str());

    // Not a restart: gone after 7000ms, not 10000ms.
    t.clock.advance_ms(6999);
    assert_eq!(t.manager.fire_due(), 0);
    t.clock.advance_ms(1);
    assert_eq!(t.manager.fire_due(), 1);
    assert!(t.manager.visible().is_empty());
}

#[test]
fn expiry_backfills_from_queue() {
    let t = toasts(1);
    t.manager.add(ToastOptions::info("first").duration_ms(1000));
    t.manager.add(ToastOptions::info("second").duration_ms(1000));

    t.clock.advance_ms(1000);
    t.manager.fire_due();
    assert_eq!(titles(&t.manager.visible()), ["second"]);

    t.clock.advance_ms(1000);
    t.manager.fire_due();
    assert!(t.manager.visible().is_empty());
}
