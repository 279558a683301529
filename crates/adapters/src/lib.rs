// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: announcements, HTTP fetches, and per-backend page layouts

pub mod announce;
mod env;
pub mod fetch;
pub mod page;
pub mod traced;

pub use announce::{
    AnnounceAdapter, Announcement, ChannelAnnouncer, NoOpAnnouncer, TracingAnnouncer,
};
pub use fetch::{FetchAdapter, FetchError, HttpFetchAdapter};
pub use page::{
    AdapterError, Continuation, CursorAdapter, OffsetAdapter, PageAdapter, PageNumberAdapter,
};
pub use traced::TracedFetch;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use announce::FakeAnnouncer;
#[cfg(any(test, feature = "test-support"))]
pub use fetch::FakeFetchAdapter;
