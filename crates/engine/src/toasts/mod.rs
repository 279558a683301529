// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Toast notifications: queue manager, subscriptions, and the timer driver

mod driver;
mod manager;
mod subscribers;

pub use driver::spawn_timer_driver;
pub use manager::{ToastManager, ToastStats};
pub use subscribers::Subscription;
