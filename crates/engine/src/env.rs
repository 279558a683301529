// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.
//!
//! Unset variables yield `None`; set but unparsable ones are logged and
//! treated as unset so the caller's default applies.

use std::str::FromStr;
use std::time::Duration;

pub const MAX_TOASTS: &str = "SK_MAX_TOASTS";
pub const TOAST_DURATION_MS: &str = "SK_TOAST_DURATION_MS";
pub const ANNOUNCE_POLICY: &str = "SK_ANNOUNCE_POLICY";
pub const API_BASE_URL: &str = "SK_API_BASE_URL";
pub const PAGE_SIZE: &str = "SK_PAGE_SIZE";

/// Every variable read by this module
pub const ALL: &[&str] = &[MAX_TOASTS, TOAST_DURATION_MS, ANNOUNCE_POLICY, API_BASE_URL, PAGE_SIZE];

fn parse_var<T: FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(var, value = %raw, error = %e, "ignoring invalid environment value");
            None
        }
    }
}

/// Visible toast capacity (`SK_MAX_TOASTS`)
pub fn max_toasts() -> Option<usize> {
    parse_var::<usize>(MAX_TOASTS).filter(|n| *n > 0)
}

/// Default toast lifetime (`SK_TOAST_DURATION_MS`); `0` means sticky
pub fn toast_duration() -> Option<Duration> {
    parse_var::<u64>(TOAST_DURATION_MS).map(Duration::from_millis)
}

/// When toasts are announced (`SK_ANNOUNCE_POLICY`: `immediate` | `on-show`)
pub fn announce_policy() -> Option<crate::AnnouncePolicy> {
    parse_var(ANNOUNCE_POLICY)
}

/// Base URL of the paginated API (`SK_API_BASE_URL`)
pub fn api_base_url() -> Option<String> {
    std::env::var(API_BASE_URL)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Items per page (`SK_PAGE_SIZE`)
pub fn page_size() -> Option<u32> {
    parse_var::<u32>(PAGE_SIZE).filter(|n| *n > 0)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
