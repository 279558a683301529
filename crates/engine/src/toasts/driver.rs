// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Async driver firing toast countdowns on the tokio runtime.

use super::ToastManager;
use sk_adapters::AnnounceAdapter;
use sk_core::{Clock, IdGen};
use std::sync::{Arc, Weak};
use tokio::task::JoinHandle;

/// Spawn a task that dismisses toasts as their countdowns run out.
///
/// The task sleeps until the earliest deadline, or until the manager reports
/// a new countdown, whichever comes first. It holds only a weak reference and
/// exits once the manager is dropped; abort the handle to stop it earlier.
pub fn spawn_timer_driver<A, C, G>(manager: &Arc<ToastManager<A, C, G>>) -> JoinHandle<()>
where
    A: AnnounceAdapter,
    C: Clock,
    G: IdGen + 'static,
{
    let wake = manager.timer_changed();
    let manager: Weak<ToastManager<A, C, G>> = Arc::downgrade(manager);

    tokio::spawn(async move {
        tracing::debug!("toast timer driver started");
        loop {
            let sleep_for = {
                let Some(manager) = manager.upgrade() else {
                    break;
                };
                let expired = manager.fire_due();
                if expired > 0 {
                    tracing::trace!(expired, "fired toast timers");
                }
                manager
                    .next_deadline()
                    .map(|deadline| deadline.saturating_duration_since(manager.clock().now()))
            };

            match sleep_for {
                Some(delay) => {
                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {}
                        _ = wake.notified() => {}
                    }
                }
                None => wake.notified().await,
            }
        }
        tracing::debug!("toast manager dropped, timer driver exiting");
    })
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
