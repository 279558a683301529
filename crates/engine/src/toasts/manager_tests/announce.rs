// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sk_adapters::Announcement;

#[yare::parameterized(
    success = { ToastVariant::Success, Politeness::Polite },
    info    = { ToastVariant::Info,    Politeness::Polite },
    warning = { ToastVariant::Warning, Politeness::Polite },
    error   = { ToastVariant::Error,   Politeness::Assertive },
)]
fn politeness_follows_variant(variant: ToastVariant, expected: Politeness) {
    let ctx = setup();
    ctx.manager.add(ToastOptions::new(variant, "hello"));
    assert_eq!(
        ctx.announcer.calls(),
        vec![Announcement {
            message: "hello".to_string(),
            politeness: expected,
        }]
    );
}

#[test]
fn announcement_includes_description() {
    let ctx = setup();
    ctx.manager
        .add(ToastOptions::error("Upload failed").description("disk full"));
    assert_eq!(ctx.announcer.messages(), ["Upload failed: disk full"]);
}

#[test]
fn politeness_override_wins() {
    let ctx = setup();
    ctx.manager
        .add(ToastOptions::info("heads up").politeness(Politeness::Assertive));
    assert_eq!(ctx.announcer.calls()[0].politeness, Politeness::Assertive);
}

#[test]
fn silent_toast_is_not_announced() {
    let ctx = setup();
    ctx.manager.add(ToastOptions::success("quiet").silent());
    assert!(ctx.announcer.calls().is_empty());
    assert_eq!(ctx.manager.stats().visible, 1);
}

#[test]
fn queued_toast_is_announced_at_admission() {
    let ctx = with_capacity(1);
    let shown = ctx.manager.add(ToastOptions::info("shown"));
    ctx.manager.add(ToastOptions::info("waiting"));
    assert_eq!(ctx.manager.stats().queued, 1);
    assert_eq!(ctx.announcer.messages(), ["shown", "waiting"]);

    // Promotion does not announce a second time.
    ctx.manager.dismiss(shown.as_str());
    assert_eq!(ctx.manager.stats().visible, 1);
    assert_eq!(ctx.announcer.messages().len(), 2);
}

#[test]
fn on_show_policy_defers_until_visible() {
    let ctx = setup_with(ToastConfig {
        max_visible: 1,
        announce_policy: AnnouncePolicy::OnShow,
        ..ToastConfig::default()
    });
    let first = ctx.manager.add(ToastOptions::info("shown"));
    ctx.manager.add(ToastOptions::info("waiting"));
    assert_eq!(ctx.announcer.messages(), ["shown"]);

    ctx.manager.dismiss(first.as_str());
    assert_eq!(ctx.announcer.messages(), ["shown", "waiting"]);
}

#[test]
fn on_show_policy_skips_toasts_dismissed_while_queued() {
    let ctx = setup_with(ToastConfig {
        max_visible: 1,
        announce_policy: AnnouncePolicy::OnShow,
        ..ToastConfig::default()
    });
    ctx.manager.add(ToastOptions::info("shown"));
    let waiting = ctx.manager.add(ToastOptions::info("waiting"));
    ctx.manager.dismiss(waiting.as_str());
    assert_eq!(ctx.announcer.messages(), ["shown"]);
}
