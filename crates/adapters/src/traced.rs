// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::fetch::{FetchAdapter, FetchError};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any FetchAdapter
#[derive(Clone)]
pub struct TracedFetch<F> {
    inner: F,
}

impl<F> TracedFetch<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

#[async_trait]
impl<F: FetchAdapter> FetchAdapter for TracedFetch<F> {
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        async {
            tracing::debug!("requesting");
            let start = std::time::Instant::now();
            let result = self.inner.fetch(url).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(_) => tracing::info!(elapsed_ms, "fetched"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "fetch failed"),
            }
            result
        }
        .instrument(tracing::info_span!("fetch", url))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
