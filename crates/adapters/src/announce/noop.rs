// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op announcement adapter.

use super::AnnounceAdapter;
use sk_core::Politeness;

/// Announcer that silently discards all announcements.
///
/// Used when there is no assistive-technology sink to talk to.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpAnnouncer;

impl NoOpAnnouncer {
    pub fn new() -> Self {
        Self
    }
}

impl AnnounceAdapter for NoOpAnnouncer {
    fn announce(&self, _message: &str, _politeness: Politeness) {}
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
