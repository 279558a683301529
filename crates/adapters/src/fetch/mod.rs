// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fetch adapters.
//!
//! The pager never talks to the network itself; it hands URLs built by a page
//! adapter to a [`FetchAdapter`] and gets raw JSON back.

mod http;

pub use http::HttpFetchAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeFetchAdapter;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from fetch operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response body is not JSON: {0}")]
    Decode(String),
}

/// Adapter performing one GET request per page
#[async_trait]
pub trait FetchAdapter: Clone + Send + Sync + 'static {
    /// Fetch `url` and return the decoded JSON body
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}
