// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed configuration for the toast manager and the pager.

use crate::env;
use serde::{Deserialize, Serialize};
use sk_core::DEFAULT_TOAST_DURATION;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Visible capacity used when nothing else is configured
pub const DEFAULT_MAX_TOASTS: usize = 3;
/// API the bundled adapters talk to when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown announce policy `{0}` (expected `immediate` or `on-show`)")]
    UnknownAnnouncePolicy(String),
}

/// When a toast is handed to the announcer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnouncePolicy {
    /// At admission, even if the toast has to wait in the queue
    #[default]
    Immediate,
    /// When the toast becomes visible
    OnShow,
}

impl FromStr for AnnouncePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "immediate" => Ok(AnnouncePolicy::Immediate),
            "on-show" | "on_show" | "onshow" => Ok(AnnouncePolicy::OnShow),
            other => Err(ConfigError::UnknownAnnouncePolicy(other.to_string())),
        }
    }
}

impl fmt::Display for AnnouncePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnouncePolicy::Immediate => f.write_str("immediate"),
            AnnouncePolicy::OnShow => f.write_str("on-show"),
        }
    }
}

/// Toast manager settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastConfig {
    pub max_visible: usize,
    /// Applied to toasts that do not set a duration
    pub default_duration: Duration,
    pub announce_policy: AnnouncePolicy,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_TOASTS,
            default_duration: DEFAULT_TOAST_DURATION,
            announce_policy: AnnouncePolicy::default(),
        }
    }
}

impl ToastConfig {
    /// Defaults overridden by `SK_MAX_TOASTS`, `SK_TOAST_DURATION_MS`, `SK_ANNOUNCE_POLICY`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_visible: env::max_toasts().unwrap_or(defaults.max_visible),
            default_duration: env::toast_duration().unwrap_or(defaults.default_duration),
            announce_policy: env::announce_policy().unwrap_or(defaults.announce_policy),
        }
    }
}

/// Pager endpoint settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagerConfig {
    /// Defaults overridden by `SK_API_BASE_URL`, `SK_PAGE_SIZE`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::api_base_url().unwrap_or(defaults.base_url),
            page_size: env::page_size().unwrap_or(defaults.page_size),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
