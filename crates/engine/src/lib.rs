// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sk-engine: toast queue manager, countdown driver and pager

mod config;
pub mod env;
mod error;
mod pager;
mod scheduler;
mod toasts;

pub use config::{
    AnnouncePolicy, ConfigError, PagerConfig, ToastConfig, DEFAULT_API_BASE_URL,
    DEFAULT_MAX_TOASTS, DEFAULT_PAGE_SIZE,
};
pub use error::PagerError;
pub use pager::Pager;
pub use scheduler::Scheduler;
pub use toasts::{spawn_timer_driver, Subscription, ToastManager, ToastStats};
