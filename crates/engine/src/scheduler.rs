// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Toast countdown timers

use sk_core::ToastId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Timer entry
#[derive(Debug, Clone)]
struct Timer {
    fires_at: Instant,
}

/// Deadline table for toast auto-dismissal.
///
/// A toast has a running timer exactly when it has an entry here; cancelling
/// removes the entry, so a cancelled timer can never fire.
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: HashMap<ToastId, Timer>,
}

impl Scheduler {
    /// Create a new scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a timer, replacing any running timer for the same toast
    pub fn set_timer(&mut self, id: ToastId, duration: Duration, now: Instant) {
        let fires_at = now + duration;
        self.timers.insert(id, Timer { fires_at });
    }

    /// Cancel a timer
    pub fn cancel_timer(&mut self, id: &str) {
        self.timers.remove(id);
    }

    /// Cancel every timer
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Check whether a toast has a running timer
    pub fn has_timer(&self, id: &str) -> bool {
        self.timers.contains_key(id)
    }

    /// Remove and return every timer that has fired, earliest deadline first
    pub fn fired_timers(&mut self, now: Instant) -> Vec<ToastId> {
        let mut fired: Vec<(Instant, ToastId)> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.fires_at <= now)
            .map(|(id, timer)| (timer.fires_at, id.clone()))
            .collect();
        fired.sort_by_key(|(fires_at, _)| *fires_at);

        for (_, id) in &fired {
            self.timers.remove(id);
        }

        fired.into_iter().map(|(_, id)| id).collect()
    }

    /// Get the next timer fire time
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|t| t.fires_at).min()
    }

    /// Check if there are any pending timers
    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
