// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Toast queue manager.
//!
//! Tracks which toasts are visible and which wait for a free slot, runs each
//! visible toast's countdown, and broadcasts the visible list to subscribers.
//!
//! Every operation is one critical section over the manager state. Announcer
//! calls and subscriber broadcasts happen after the lock is released, with the
//! state as it was at the end of that section. Each broadcast snapshot is
//! numbered inside the section so overlapping operations deliver in order.

use super::subscribers::{Subscribers, Subscription};
use crate::config::{AnnouncePolicy, ToastConfig};
use crate::scheduler::Scheduler;
use parking_lot::Mutex;
use serde::Serialize;
use sk_adapters::AnnounceAdapter;
use sk_core::{
    Clock, IdGen, Politeness, SystemClock, Toast, ToastId, ToastOptions, UuidIdGen,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;

/// Read-only counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToastStats {
    pub visible: usize,
    pub queued: usize,
    pub max_visible: usize,
}

/// Countdown bookkeeping for a toast with a positive duration.
///
/// `started_at` is set while the timer runs and cleared while paused.
#[derive(Debug, Clone, Copy)]
struct Countdown {
    remaining: Duration,
    started_at: Option<Instant>,
}

struct ToastState {
    visible: Vec<Toast>,
    queued: VecDeque<Toast>,
    max_visible: usize,
    countdowns: HashMap<ToastId, Countdown>,
    scheduler: Scheduler,
    revision: u64,
}

impl ToastState {
    /// Numbered copy of the visible list for broadcasting
    fn snapshot(&mut self) -> Snapshot {
        self.revision += 1;
        Snapshot {
            revision: self.revision,
            visible: self.visible.clone(),
        }
    }
}

struct Snapshot {
    revision: u64,
    visible: Vec<Toast>,
}

/// Side effects collected inside a critical section and applied after it
#[derive(Default)]
struct Effects {
    announcements: Vec<(String, Politeness)>,
    broadcast: Option<Snapshot>,
    timers_changed: bool,
}

impl Effects {
    fn announce(&mut self, toast: &Toast) {
        if toast.announce {
            self.announcements
                .push((toast.announcement(), toast.politeness));
        }
    }
}

/// Manager for transient notifications.
///
/// Construct one per application and share it (usually in an `Arc`) with the
/// producers, the rendering layer, and the timer driver.
pub struct ToastManager<A, C = SystemClock, G = UuidIdGen> {
    state: Mutex<ToastState>,
    subscribers: Subscribers,
    announcer: A,
    clock: C,
    ids: G,
    default_duration: Duration,
    announce_policy: AnnouncePolicy,
    timer_changed: Arc<Notify>,
}

impl<A: AnnounceAdapter> ToastManager<A> {
    /// Manager on the system clock with UUID toast ids
    pub fn system(announcer: A, config: ToastConfig) -> Self {
        Self::new(announcer, SystemClock, UuidIdGen, config)
    }
}

impl<A, C, G> ToastManager<A, C, G>
where
    A: AnnounceAdapter,
    C: Clock,
    G: IdGen,
{
    pub fn new(announcer: A, clock: C, ids: G, config: ToastConfig) -> Self {
        Self {
            state: Mutex::new(ToastState {
                visible: Vec::new(),
                queued: VecDeque::new(),
                max_visible: clamp_capacity(config.max_visible),
                countdowns: HashMap::new(),
                scheduler: Scheduler::new(),
                revision: 0,
            }),
            subscribers: Subscribers::default(),
            announcer,
            clock,
            ids,
            default_duration: config.default_duration,
            announce_policy: config.announce_policy,
            timer_changed: Arc::new(Notify::new()),
        }
    }

    /// Get a reference to the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Admit a toast: show it if there is room, queue it otherwise.
    pub fn add(&self, options: ToastOptions) -> ToastId {
        let id = ToastId::new(self.ids.next());
        let toast = options.into_toast(id.clone(), self.default_duration);
        let now = self.clock.now();
        let mut effects = Effects::default();
        {
            let mut state = self.state.lock();
            if self.announce_policy == AnnouncePolicy::Immediate {
                effects.announce(&toast);
            }
            if state.visible.len() < state.max_visible {
                self.show(&mut state, toast, now, &mut effects);
                effects.broadcast = Some(state.snapshot());
            } else {
                tracing::debug!(
                    toast_id = %id,
                    variant = %toast.variant,
                    queued = state.queued.len() + 1,
                    "capacity reached, queueing toast"
                );
                if toast.variant.is_error() {
                    state.queued.push_front(toast);
                } else {
                    state.queued.push_back(toast);
                }
            }
        }
        self.apply(effects);
        id
    }

    /// Remove a toast wherever it is. Unknown ids are a no-op.
    pub fn dismiss(&self, id: &str) {
        let now = self.clock.now();
        let mut effects = Effects::default();
        {
            let mut state = self.state.lock();
            if remove(&mut state, id) {
                tracing::debug!(toast_id = id, "dismissed");
            }
            self.process_queue(&mut state, now, &mut effects);
            effects.broadcast = Some(state.snapshot());
        }
        self.apply(effects);
    }

    /// Remove every toast and cancel every timer
    pub fn dismiss_all(&self) {
        let mut effects = Effects::default();
        {
            let mut state = self.state.lock();
            state.scheduler.cancel_all();
            state.countdowns.clear();
            state.visible.clear();
            state.queued.clear();
            effects.broadcast = Some(state.snapshot());
        }
        tracing::debug!("dismissed all toasts");
        self.apply(effects);
    }

    /// Stop a toast's countdown, keeping the time it has left.
    ///
    /// No-op unless the toast has a running timer.
    pub fn pause(&self, id: &str) {
        let now = self.clock.now();
        let mut state = self.state.lock();
        pause_locked(&mut state, id, now);
    }

    /// Restart a paused countdown with the time it had left.
    ///
    /// No-op if the timer is already running or nothing is left to run.
    pub fn resume(&self, id: &str) {
        let now = self.clock.now();
        let resumed = {
            let mut state = self.state.lock();
            resume_locked(&mut state, id, now)
        };
        if resumed {
            self.timer_changed.notify_one();
        }
    }

    /// Pause every visible toast (e.g. while the pointer is over the toast region)
    pub fn pause_all(&self) {
        let now = self.clock.now();
        let mut state = self.state.lock();
        let ids: Vec<ToastId> = state.visible.iter().map(|t| t.id.clone()).collect();
        for id in ids {
            pause_locked(&mut state, id.as_str(), now);
        }
    }

    /// Resume every paused visible toast
    pub fn resume_all(&self) {
        let now = self.clock.now();
        let resumed = {
            let mut state = self.state.lock();
            let ids: Vec<ToastId> = state.visible.iter().map(|t| t.id.clone()).collect();
            ids.iter()
                .fold(false, |any, id| resume_locked(&mut state, id.as_str(), now) || any)
        };
        if resumed {
            self.timer_changed.notify_one();
        }
    }

    /// Change the visible capacity.
    ///
    /// Shrinking never evicts visible toasts; growing promotes queued ones
    /// right away. Zero is raised to one.
    pub fn set_max_toasts(&self, max_visible: usize) {
        if max_visible == 0 {
            tracing::warn!("max visible toasts must be positive, using 1");
        }
        let now = self.clock.now();
        let mut effects = Effects::default();
        {
            let mut state = self.state.lock();
            state.max_visible = clamp_capacity(max_visible);
            let before = state.visible.len();
            self.process_queue(&mut state, now, &mut effects);
            if state.visible.len() != before {
                effects.broadcast = Some(state.snapshot());
            }
        }
        self.apply(effects);
    }

    /// Register a callback for visible-list changes.
    ///
    /// The callback is invoked once right away with the current list.
    pub fn subscribe(
        &self,
        callback: impl Fn(&[Toast]) + Send + Sync + 'static,
    ) -> Subscription {
        let callback = Arc::new(callback);
        let visible = self.visible();
        let subscription = self.subscribers.insert(callback.clone());
        callback(&visible);
        subscription
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn stats(&self) -> ToastStats {
        let state = self.state.lock();
        ToastStats {
            visible: state.visible.len(),
            queued: state.queued.len(),
            max_visible: state.max_visible,
        }
    }

    /// Visible toasts in display order
    pub fn visible(&self) -> Vec<Toast> {
        self.state.lock().visible.clone()
    }

    /// Queued toasts in promotion order
    pub fn queued(&self) -> Vec<Toast> {
        self.state.lock().queued.iter().cloned().collect()
    }

    /// Whether the toast has a countdown that is currently stopped
    pub fn is_paused(&self, id: &str) -> bool {
        let state = self.state.lock();
        state.countdowns.contains_key(id) && !state.scheduler.has_timer(id)
    }

    /// Time left before auto-dismissal, if the toast has a countdown
    pub fn remaining(&self, id: &str) -> Option<Duration> {
        let now = self.clock.now();
        let state = self.state.lock();
        let countdown = state.countdowns.get(id)?;
        Some(match countdown.started_at {
            Some(started_at) => countdown
                .remaining
                .saturating_sub(now.saturating_duration_since(started_at)),
            None => countdown.remaining,
        })
    }

    /// Run a toast's action callback, then dismiss the toast.
    ///
    /// Returns false when the toast is unknown or has no action.
    pub fn invoke_action(&self, id: &str) -> bool {
        let action = {
            let state = self.state.lock();
            state
                .visible
                .iter()
                .chain(state.queued.iter())
                .find(|t| t.id == id)
                .and_then(|t| t.action.clone())
        };
        let Some(action) = action else {
            return false;
        };
        tracing::debug!(toast_id = id, label = %action.label, "invoking toast action");
        action.invoke();
        self.dismiss(id);
        true
    }

    /// Dismiss every toast whose countdown has run out.
    ///
    /// Returns how many toasts expired.
    pub fn fire_due(&self) -> usize {
        let now = self.clock.now();
        let mut effects = Effects::default();
        let expired = {
            let mut state = self.state.lock();
            let fired = state.scheduler.fired_timers(now);
            if fired.is_empty() {
                return 0;
            }
            for id in &fired {
                tracing::debug!(toast_id = %id, "toast expired");
                remove(&mut state, id.as_str());
            }
            self.process_queue(&mut state, now, &mut effects);
            effects.broadcast = Some(state.snapshot());
            fired.len()
        };
        self.apply(effects);
        expired
    }

    /// Earliest running countdown deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.lock().scheduler.next_deadline()
    }

    /// Signalled whenever a countdown starts, so a sleeping timer driver can
    /// recompute its deadline.
    pub fn timer_changed(&self) -> Arc<Notify> {
        Arc::clone(&self.timer_changed)
    }

    fn show(&self, state: &mut ToastState, toast: Toast, now: Instant, effects: &mut Effects) {
        if toast.auto_dismisses() {
            state.countdowns.insert(
                toast.id.clone(),
                Countdown {
                    remaining: toast.duration,
                    started_at: Some(now),
                },
            );
            state.scheduler.set_timer(toast.id.clone(), toast.duration, now);
            effects.timers_changed = true;
        }
        if self.announce_policy == AnnouncePolicy::OnShow {
            effects.announce(&toast);
        }
        tracing::debug!(
            toast_id = %toast.id,
            variant = %toast.variant,
            duration_ms = toast.duration.as_millis() as u64,
            "showing toast"
        );
        state.visible.push(toast);
    }

    /// Promote from the front of the queue while there is room
    fn process_queue(&self, state: &mut ToastState, now: Instant, effects: &mut Effects) {
        while state.visible.len() < state.max_visible {
            let Some(toast) = state.queued.pop_front() else {
                break;
            };
            self.show(state, toast, now, effects);
        }
    }

    fn apply(&self, effects: Effects) {
        for (message, politeness) in &effects.announcements {
            self.announcer.announce(message, *politeness);
        }
        if effects.timers_changed {
            self.timer_changed.notify_one();
        }
        if let Some(snapshot) = effects.broadcast {
            self.subscribers.broadcast(snapshot.revision, &snapshot.visible);
        }
    }
}

impl<A, C, G> Drop for ToastManager<A, C, G> {
    fn drop(&mut self) {
        // Wake the timer driver so it notices the manager is gone.
        self.timer_changed.notify_one();
    }
}

fn clamp_capacity(max_visible: usize) -> usize {
    max_visible.max(1)
}

/// Drop a toast and its timer bookkeeping; true if it was tracked
fn remove(state: &mut ToastState, id: &str) -> bool {
    state.scheduler.cancel_timer(id);
    state.countdowns.remove(id);
    let before = state.visible.len() + state.queued.len();
    state.visible.retain(|t| t.id != id);
    state.queued.retain(|t| t.id != id);
    before != state.visible.len() + state.queued.len()
}

fn pause_locked(state: &mut ToastState, id: &str, now: Instant) {
    if !state.scheduler.has_timer(id) {
        return;
    }
    let Some(countdown) = state.countdowns.get_mut(id) else {
        return;
    };
    if let Some(started_at) = countdown.started_at {
        let elapsed = now.saturating_duration_since(started_at);
        let remaining = countdown.remaining.saturating_sub(elapsed);
        // Already due: keep the timer so the next `fire_due` retires it.
        if remaining.is_zero() {
            tracing::debug!(toast_id = id, "pause ignored, countdown already due");
            return;
        }
        countdown.remaining = remaining;
        countdown.started_at = None;
    }
    state.scheduler.cancel_timer(id);
    tracing::debug!(toast_id = id, remaining_ms = countdown.remaining.as_millis() as u64, "paused");
}

fn resume_locked(state: &mut ToastState, id: &str, now: Instant) -> bool {
    if state.scheduler.has_timer(id) {
        return false;
    }
    let Some(countdown) = state.countdowns.get_mut(id) else {
        return false;
    };
    if countdown.remaining.is_zero() {
        return false;
    }
    countdown.started_at = Some(now);
    let remaining = countdown.remaining;
    state.scheduler.set_timer(ToastId::new(id), remaining, now);
    tracing::debug!(toast_id = id, remaining_ms = remaining.as_millis() as u64, "resumed");
    true
}

#[cfg(test)]
#[path = "manager_tests/mod.rs"]
mod tests;
