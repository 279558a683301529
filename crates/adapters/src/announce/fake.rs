// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake announcement adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AnnounceAdapter, Announcement};
use parking_lot::Mutex;
use sk_core::Politeness;
use std::sync::Arc;

/// Fake announcer that records every announcement
#[derive(Clone, Default)]
pub struct FakeAnnouncer {
    inner: Arc<Mutex<Vec<Announcement>>>,
}

impl FakeAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded announcements
    pub fn calls(&self) -> Vec<Announcement> {
        self.inner.lock().clone()
    }

    /// Recorded messages only, in call order
    pub fn messages(&self) -> Vec<String> {
        self.inner.lock().iter().map(|a| a.message.clone()).collect()
    }
}

impl AnnounceAdapter for FakeAnnouncer {
    fn announce(&self, message: &str, politeness: Politeness) {
        self.inner.lock().push(Announcement {
            message: message.to_string(),
            politeness,
        });
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
