// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP fetch adapter using reqwest.

use super::{FetchAdapter, FetchError};
use crate::env;
use async_trait::async_trait;
use reqwest::Client;

#[derive(Clone, Debug)]
pub struct HttpFetchAdapter {
    client: Client,
}

impl HttpFetchAdapter {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(env::http_timeout())
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn user_agent() -> &'static str {
        concat!("sk/", env!("CARGO_PKG_VERSION"))
    }
}

#[async_trait]
impl FetchAdapter for HttpFetchAdapter {
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
