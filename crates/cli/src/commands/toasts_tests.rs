// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sk_core::ToastId;

fn args() -> DemoArgs {
    DemoArgs {
        max: None,
        duration_ms: None,
        announce: None,
    }
}

#[test]
fn overrides_win_over_env_config() {
    let config = config(&DemoArgs {
        max: Some(1),
        duration_ms: Some(750),
        announce: Some(AnnouncePolicy::OnShow),
    });
    assert_eq!(config.max_visible, 1);
    assert_eq!(config.default_duration, Duration::from_millis(750));
    assert_eq!(config.announce_policy, AnnouncePolicy::OnShow);
}

#[test]
fn script_overflows_default_capacity_with_an_error() {
    let script = script();
    assert!(script.len() > sk_engine::DEFAULT_MAX_TOASTS);
    let error = script
        .iter()
        .position(|t| t.variant.is_error())
        .unwrap();
    assert!(error >= sk_engine::DEFAULT_MAX_TOASTS);
    assert!(script[error].action.is_some());
}

#[test]
fn frame_line_lists_visible_toasts() {
    let visible = vec![
        ToastOptions::success("Saved").into_toast(ToastId::new("a"), Duration::ZERO),
        ToastOptions::error("Failed").into_toast(ToastId::new("b"), Duration::ZERO),
    ];
    assert_eq!(frame_line(&visible), "visible: [success] Saved | [error] Failed");
    assert_eq!(frame_line(&[]), "visible: (none)");
}

#[test]
fn drain_deadline_covers_every_toast_plus_slack() {
    assert_eq!(
        drain_deadline(Duration::from_millis(100), 6).unwrap(),
        Duration::from_millis(1700)
    );
}

#[yare::parameterized(
    max_duration = { Duration::MAX,                    6 },
    huge_count   = { Duration::from_secs(1),           usize::MAX },
    near_max     = { Duration::MAX / 3,                6 },
)]
fn drain_deadline_rejects_overflow(duration: Duration, count: usize) {
    let err = drain_deadline(duration, count).unwrap_err();
    assert!(err.to_string().contains("too large"), "{err}");
}

#[tokio::test]
async fn demo_rejects_sticky_default() {
    let err = demo(
        DemoArgs {
            duration_ms: Some(0),
            ..args()
        },
        OutputFormat::Text,
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("positive"));
}

#[tokio::test]
async fn demo_drains_the_queue() {
    demo(
        DemoArgs {
            max: Some(2),
            duration_ms: Some(100),
            announce: Some(AnnouncePolicy::Immediate),
        },
        OutputFormat::Json,
    )
    .await
    .unwrap();
}

#[test]
fn events_serialize_with_tag() {
    let event = DemoEvent::Announce {
        message: "Saved",
        politeness: Politeness::Polite,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "event": "announce", "message": "Saved", "politeness": "polite" })
    );
}
