// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sk-core: data model shared by the starter kit's toast and pagination subsystems

pub mod clock;
pub mod id;
pub mod page;
pub mod toast;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use page::{ContractError, Filters, PageResult, CATEGORY_FILTER, SEARCH_FILTER};
pub use toast::{
    Politeness, Toast, ToastAction, ToastId, ToastOptions, ToastVariant, DEFAULT_TOAST_DURATION,
};
