// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Toast, ToastId, ToastOptions, ToastVariant, DEFAULT_TOAST_DURATION};
use serde_json::{json, Value};
use std::time::Duration;

// ── Toast factory functions ─────────────────────────────────────────────────

/// Admitted toast with defaults resolved, for tests that bypass the manager
pub fn toast(id: &str, variant: ToastVariant, title: &str) -> Toast {
    ToastOptions::new(variant, title).into_toast(ToastId::new(id), DEFAULT_TOAST_DURATION)
}

/// Options for a toast that lives for `ms` milliseconds
pub fn timed(variant: ToastVariant, title: &str, ms: u64) -> ToastOptions {
    ToastOptions::new(variant, title).duration(Duration::from_millis(ms))
}

// ── Backend payload factories ───────────────────────────────────────────────

/// `count` product records numbered from `first_id`
pub fn products(first_id: u64, count: u64) -> Vec<Value> {
    (first_id..first_id + count)
        .map(|id| json!({ "id": id, "title": format!("Product {id}") }))
        .collect()
}

/// Skip/limit style payload (`{ products, total, skip, limit }`)
pub fn offset_payload(first_id: u64, count: u64, total: u64, skip: u64, limit: u64) -> Value {
    json!({
        "products": products(first_id, count),
        "total": total,
        "skip": skip,
        "limit": limit,
    })
}
