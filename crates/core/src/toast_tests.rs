// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[yare::parameterized(
    success = { ToastVariant::Success, Politeness::Polite },
    error   = { ToastVariant::Error,   Politeness::Assertive },
    warning = { ToastVariant::Warning, Politeness::Polite },
    info    = { ToastVariant::Info,    Politeness::Polite },
)]
fn default_politeness(variant: ToastVariant, expected: Politeness) {
    assert_eq!(variant.default_politeness(), expected);
    let toast = ToastOptions::new(variant, "t").into_toast(ToastId::new("a"), DEFAULT_TOAST_DURATION);
    assert_eq!(toast.politeness, expected);
}

#[test]
fn into_toast_applies_defaults() {
    let toast = ToastOptions::info("Saved").into_toast(ToastId::new("a"), DEFAULT_TOAST_DURATION);
    assert_eq!(toast.id, "a");
    assert_eq!(toast.duration, Duration::from_millis(5000));
    assert!(toast.announce);
    assert!(toast.auto_dismisses());
    assert!(toast.description.is_none());
    assert!(toast.action.is_none());
}

#[test]
fn into_toast_keeps_explicit_values() {
    let toast = ToastOptions::error("Failed")
        .description("disk full")
        .duration_ms(1200)
        .silent()
        .politeness(Politeness::Polite)
        .into_toast(ToastId::new("b"), DEFAULT_TOAST_DURATION);

    assert_eq!(toast.variant, ToastVariant::Error);
    assert_eq!(toast.duration, Duration::from_millis(1200));
    assert!(!toast.announce);
    assert_eq!(toast.politeness, Politeness::Polite);
}

#[test]
fn sticky_toast_never_auto_dismisses() {
    let toast = ToastOptions::warning("Offline")
        .sticky()
        .into_toast(ToastId::new("c"), DEFAULT_TOAST_DURATION);
    assert!(!toast.auto_dismisses());
}

#[test]
fn announcement_includes_description() {
    let plain = ToastOptions::info("Saved").into_toast(ToastId::new("a"), DEFAULT_TOAST_DURATION);
    assert_eq!(plain.announcement(), "Saved");

    let described = ToastOptions::info("Saved")
        .description("3 files")
        .into_toast(ToastId::new("b"), DEFAULT_TOAST_DURATION);
    assert_eq!(described.announcement(), "Saved: 3 files");

    let empty = ToastOptions::info("Saved")
        .description("")
        .into_toast(ToastId::new("c"), DEFAULT_TOAST_DURATION);
    assert_eq!(empty.announcement(), "Saved");
}

#[test]
fn action_invokes_callback() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let action = ToastAction::new("Undo", move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    action.invoke();
    action.clone().invoke();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert!(format!("{action:?}").contains("Undo"));
}

#[test]
fn variant_serde_is_lowercase() {
    let json = serde_json::to_string(&ToastVariant::Warning).unwrap();
    assert_eq!(json, "\"warning\"");
    let parsed: Politeness = serde_json::from_str("\"assertive\"").unwrap();
    assert_eq!(parsed, Politeness::Assertive);
    assert_eq!(ToastVariant::Error.to_string(), "error");
}
