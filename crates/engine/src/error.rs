// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the pager

use sk_adapters::FetchError;
use sk_core::ContractError;
use thiserror::Error;

/// Errors that can occur while loading a page
#[derive(Debug, Error)]
pub enum PagerError {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("response from {url} violates the page contract: {source}")]
    Contract {
        url: String,
        #[source]
        source: ContractError,
    },
}
