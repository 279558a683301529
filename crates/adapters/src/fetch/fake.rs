// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake fetch adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FetchAdapter, FetchError};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct FakeFetchState {
    routes: HashMap<String, Result<Value, FetchError>>,
    calls: Vec<String>,
}

/// Fake fetch adapter serving scripted responses by exact URL.
///
/// Unscripted URLs answer with a 404 status error.
#[derive(Clone, Default)]
pub struct FakeFetchAdapter {
    inner: Arc<Mutex<FakeFetchState>>,
}

impl FakeFetchAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`, replacing any previous script
    pub fn respond(&self, url: impl Into<String>, body: Value) {
        self.inner.lock().routes.insert(url.into(), Ok(body));
    }

    /// Fail requests for `url` with `error`
    pub fn fail(&self, url: impl Into<String>, error: FetchError) {
        self.inner.lock().routes.insert(url.into(), Err(error));
    }

    /// Every requested URL, in call order
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl FetchAdapter for FakeFetchAdapter {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let mut inner = self.inner.lock();
        inner.calls.push(url.to_string());
        inner
            .routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Status {
                    status: 404,
                    body: format!("no fake response for {url}"),
                })
            })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
