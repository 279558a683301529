// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriber registry for visible-toast broadcasts

use parking_lot::{Mutex, ReentrantMutex};
use sk_core::Toast;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

type Callback = Arc<dyn Fn(&[Toast]) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: BTreeMap<u64, Callback>,
}

/// Callbacks receiving the visible list whenever it changes.
///
/// Callbacks run without the registry lock held, so a callback may itself
/// subscribe, unsubscribe or call back into the manager.
///
/// Every broadcast carries the revision the manager assigned under its state
/// lock. Deliveries are serialized and a revision older than the last one
/// delivered is dropped, so subscribers never see the list move backwards.
#[derive(Clone, Default)]
pub(crate) struct Subscribers {
    inner: Arc<Mutex<Registry>>,
    delivery: Arc<ReentrantMutex<()>>,
    delivered: Arc<AtomicU64>,
}

impl Subscribers {
    pub(crate) fn insert(&self, callback: Callback) -> Subscription {
        let mut registry = self.inner.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.callbacks.insert(id, callback);
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Invoke every callback, in subscription order, unless a newer revision
    /// has already gone out.
    ///
    /// The delivery lock is reentrant: a callback that changes the manager
    /// delivers the newer revision from inside this call, and the outer
    /// delivery stops before reaching the remaining callbacks.
    pub(crate) fn broadcast(&self, revision: u64, visible: &[Toast]) {
        let _delivery = self.delivery.lock();
        if revision <= self.delivered.load(Ordering::Acquire) {
            tracing::trace!(revision, "dropping stale broadcast");
            return;
        }
        self.delivered.store(revision, Ordering::Release);
        let callbacks: Vec<Callback> = self.inner.lock().callbacks.values().cloned().collect();
        for callback in callbacks {
            if self.delivered.load(Ordering::Acquire) != revision {
                break;
            }
            callback(visible);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.lock().callbacks.len()
    }
}

/// Handle returned by `subscribe`; dropping it keeps the subscription alive.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Stop receiving updates. No-op if the manager is gone.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().callbacks.remove(&self.id);
        }
    }
}
