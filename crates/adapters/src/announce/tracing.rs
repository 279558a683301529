// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Announcer that writes announcements to the tracing log.
//!
//! Headless and terminal hosts have no live region; a structured log line is
//! the closest equivalent and keeps the announcement observable.

use super::AnnounceAdapter;
use sk_core::Politeness;

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAnnouncer;

impl TracingAnnouncer {
    pub fn new() -> Self {
        Self
    }
}

impl AnnounceAdapter for TracingAnnouncer {
    fn announce(&self, message: &str, politeness: Politeness) {
        match politeness {
            Politeness::Assertive => tracing::warn!(%politeness, text = message, "announce"),
            Politeness::Polite => tracing::info!(%politeness, text = message, "announce"),
        }
    }
}

#[cfg(test)]
#[path = "tracing_tests.rs"]
mod tests;
