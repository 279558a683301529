//! Screen-reader announcement specs

use crate::prelude::*;
use sk_core::Politeness;

#[test]
fn queued_toasts_are_announced_on_admission() {
    let t = toasts(1);
    t.manager.add(ToastOptions::success("Saved"));
    t.manager.add(ToastOptions::error("Failed").description("try again"));

    let calls = t.announcer.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].message, "Failed: try again");
    assert_eq!(calls[1].politeness, Politeness::Assertive);
    assert_eq!(calls[0].politeness, Politeness::Polite);
}
