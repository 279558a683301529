// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Skip/limit pagination in the DummyJSON style.
//!
//! Routing:
//! - a `search` filter selects `{base}/{resource}/search?q=...`
//! - otherwise a `category` filter selects `{base}/{resource}/category/{category}`
//! - otherwise `{base}/{resource}`
//!
//! `search` wins over `category` when both are set, since the search route
//! cannot be narrowed by category. Every other filter (`sortBy`, `order`, ...)
//! is appended as a query pair after `limit` and `skip`.
//!
//! Responses look like `{ "<items>": [...], "total": 194, "skip": 0, "limit": 20 }`.

use super::{
    into_object, items, optional_u64, required_u64, AdapterError, Endpoint, PageAdapter,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sk_core::{ContractError, Filters, PageResult, CATEGORY_FILTER, SEARCH_FILTER};
use std::marker::PhantomData;

const SEARCH_ROUTED: &[&str] = &[SEARCH_FILTER, CATEGORY_FILTER];
const CATEGORY_ROUTED: &[&str] = &[CATEGORY_FILTER];

#[derive(Debug, Clone)]
pub struct OffsetAdapter<T> {
    endpoint: Endpoint,
    items_key: String,
    page_size: u64,
    _item: PhantomData<fn() -> T>,
}

impl<T> OffsetAdapter<T> {
    /// Adapter for `{base_url}/{resource}`; the items array is expected under
    /// the last resource segment (`products` for `"products"`).
    pub fn new(base_url: &str, resource: &str, page_size: u64) -> Result<Self, AdapterError> {
        if page_size == 0 {
            return Err(AdapterError::ZeroPageSize);
        }
        let endpoint = Endpoint::new(base_url, resource)?;
        Ok(Self {
            items_key: endpoint.resource_name().to_string(),
            endpoint,
            page_size,
            _item: PhantomData,
        })
    }

    /// Override the response field holding the items array
    pub fn with_items_key(mut self, key: impl Into<String>) -> Self {
        self.items_key = key.into();
        self
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }
}

impl<T> PageAdapter for OffsetAdapter<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    type Item = T;
    type Cursor = u64;

    fn initial_page_param(&self) -> u64 {
        0
    }

    fn build_url(&self, filters: &Filters, skip: &u64) -> String {
        let limit = self.page_size.to_string();
        let skip = skip.to_string();
        let mut query: Vec<(&str, &str)> = Vec::new();

        let (segments, routed) = if let Some(q) = filters.search() {
            query.push(("q", q));
            (vec!["search"], SEARCH_ROUTED)
        } else if let Some(category) = filters.category() {
            (vec!["category", category], CATEGORY_ROUTED)
        } else {
            (Vec::new(), &[] as &[&str])
        };

        query.push(("limit", limit.as_str()));
        query.push(("skip", skip.as_str()));
        query.extend(filters.iter_except(routed));
        self.endpoint.url(&segments, &query)
    }

    fn parse_response(&self, raw: Value) -> Result<PageResult<T>, ContractError> {
        let mut obj = into_object(raw)?;
        let total = required_u64(&obj, "total")?;
        let skip = required_u64(&obj, "skip")?;
        let limit = optional_u64(&obj, "limit")?.unwrap_or(self.page_size);
        let items = items(&mut obj, &self.items_key)?;
        // A window reaching past u64::MAX cannot be followed by another page.
        let has_next_page = skip.saturating_add(limit) < total;
        Ok(PageResult::new(items, total, has_next_page))
    }

    fn next_page_param(&self, last: &PageResult<T>, all: &[PageResult<T>]) -> Option<u64> {
        // An empty page means the backend ran dry whatever its total says.
        if last.items.is_empty() {
            return None;
        }
        let next = u64::try_from(all.len()).ok()?.checked_mul(self.page_size)?;
        (next < last.total).then_some(next)
    }
}

#[cfg(test)]
#[path = "offset_tests.rs"]
mod tests;
