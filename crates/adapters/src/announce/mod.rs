// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Announcement adapters.
//!
//! The toast manager hands every announced toast to an [`AnnounceAdapter`],
//! which forwards it to whatever plays the role of a screen-reader live region.

mod channel;
mod noop;
mod tracing;

pub use channel::ChannelAnnouncer;
pub use noop::NoOpAnnouncer;
pub use self::tracing::TracingAnnouncer;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAnnouncer;

use serde::Serialize;
use sk_core::Politeness;

/// A message for assistive technology
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub message: String,
    pub politeness: Politeness,
}

/// Adapter for announcing messages to assistive technology.
///
/// Announcing is fire-and-forget: implementations must not block and have
/// no way to report failure back to the caller.
pub trait AnnounceAdapter: Clone + Send + Sync + 'static {
    fn announce(&self, message: &str, politeness: Politeness);
}
