// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Paginated fetch model: one page of results and the filters that select them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Filter key routed to full-text search by adapters that support it
pub const SEARCH_FILTER: &str = "search";
/// Filter key routed to a category listing by adapters that support it
pub const CATEGORY_FILTER: &str = "category";

/// One page of backend results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    /// Total entity count as reported by the backend (not verified)
    pub total: u64,
    pub has_next_page: bool,
    /// Continuation token for token-paginated backends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total: u64, has_next_page: bool) -> Self {
        Self {
            items,
            total,
            has_next_page,
            next_token: None,
        }
    }

    pub fn with_next_token(mut self, token: Option<String>) -> Self {
        self.next_token = token;
        self
    }
}

/// Generic filter set handed to page adapters.
///
/// Keys iterate in sorted order so URLs built from the same filters are
/// identical. Empty values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a filter; empty values remove the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn search(&self) -> Option<&str> {
        self.get(SEARCH_FILTER)
    }

    pub fn category(&self) -> Option<&str> {
        self.get(CATEGORY_FILTER)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All filters except the given keys, in key order
    pub fn iter_except<'a>(
        &'a self,
        skip: &'a [&'a str],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| !skip.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Filters::new();
        for (k, v) in iter {
            filters.set(k, v);
        }
        filters
    }
}

/// A backend response that does not have the shape its page adapter expects.
///
/// This is a programming error in the adapter/backend pairing, never a
/// transient condition.
#[derive(Debug, Error, PartialEq)]
pub enum ContractError {
    #[error("response is not a JSON object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("field `{field}` has wrong type, expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
    #[error("item {index} in `{field}` could not be decoded: {message}")]
    Item {
        field: String,
        index: usize,
        message: String,
    },
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
