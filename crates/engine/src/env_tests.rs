// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::AnnouncePolicy;
use serial_test::serial;

fn clear() {
    for var in ALL {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn unset_vars_are_none() {
    clear();
    assert_eq!(max_toasts(), None);
    assert_eq!(toast_duration(), None);
    assert_eq!(announce_policy(), None);
    assert_eq!(api_base_url(), None);
    assert_eq!(page_size(), None);
}

#[test]
#[serial]
fn valid_values_parse() {
    clear();
    std::env::set_var(MAX_TOASTS, " 5 ");
    std::env::set_var(TOAST_DURATION_MS, "0");
    std::env::set_var(ANNOUNCE_POLICY, "on-show");
    std::env::set_var(API_BASE_URL, "https://api.test");
    std::env::set_var(PAGE_SIZE, "50");

    assert_eq!(max_toasts(), Some(5));
    assert_eq!(toast_duration(), Some(Duration::ZERO));
    assert_eq!(announce_policy(), Some(AnnouncePolicy::OnShow));
    assert_eq!(api_base_url().as_deref(), Some("https://api.test"));
    assert_eq!(page_size(), Some(50));
    clear();
}

#[test]
#[serial]
fn invalid_values_are_ignored() {
    let cases = [
        (MAX_TOASTS, "-1"),
        (MAX_TOASTS, "0"),
        (TOAST_DURATION_MS, "five"),
        (ANNOUNCE_POLICY, "loudly"),
        (PAGE_SIZE, "0"),
    ];
    for (var, value) in cases {
        clear();
        std::env::set_var(var, value);
        assert_eq!(max_toasts(), None, "{var}={value}");
        assert_eq!(toast_duration(), None, "{var}={value}");
        assert_eq!(announce_policy(), None, "{var}={value}");
        assert_eq!(page_size(), None, "{var}={value}");
    }
    clear();
}

#[test]
#[serial]
fn blank_base_url_is_none() {
    clear();
    std::env::set_var(API_BASE_URL, "   ");
    assert_eq!(api_base_url(), None);
    clear();
}
