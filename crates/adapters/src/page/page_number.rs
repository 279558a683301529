// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page-number pagination: `{base}/{resource}?page=N&per_page=S`.
//!
//! A `search` filter is sent as `q`; every other filter is appended as-is.
//! Responses look like `{ "data": [...], "total": 53, "page": 2, "total_pages": 3 }`;
//! a backend may instead answer with an explicit `has_more` flag, which takes
//! precedence.

use super::{
    into_object, items, optional_bool, optional_u64, required_u64, AdapterError, Endpoint,
    PageAdapter,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sk_core::{ContractError, Filters, PageResult, SEARCH_FILTER};
use std::marker::PhantomData;

const DEFAULT_ITEMS_KEY: &str = "data";

#[derive(Debug, Clone)]
pub struct PageNumberAdapter<T> {
    endpoint: Endpoint,
    items_key: String,
    page_size: u32,
    _item: PhantomData<fn() -> T>,
}

impl<T> PageNumberAdapter<T> {
    pub fn new(base_url: &str, resource: &str, page_size: u32) -> Result<Self, AdapterError> {
        if page_size == 0 {
            return Err(AdapterError::ZeroPageSize);
        }
        Ok(Self {
            endpoint: Endpoint::new(base_url, resource)?,
            items_key: DEFAULT_ITEMS_KEY.to_string(),
            page_size,
            _item: PhantomData,
        })
    }

    pub fn with_items_key(mut self, key: impl Into<String>) -> Self {
        self.items_key = key.into();
        self
    }
}

impl<T> PageAdapter for PageNumberAdapter<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    type Item = T;
    type Cursor = u32;

    fn initial_page_param(&self) -> u32 {
        1
    }

    fn build_url(&self, filters: &Filters, page: &u32) -> String {
        let page = page.to_string();
        let per_page = self.page_size.to_string();
        let mut query = vec![("page", page.as_str()), ("per_page", per_page.as_str())];
        if let Some(q) = filters.search() {
            query.push(("q", q));
        }
        query.extend(filters.iter_except(&[SEARCH_FILTER]));
        self.endpoint.url(&[], &query)
    }

    fn parse_response(&self, raw: Value) -> Result<PageResult<T>, ContractError> {
        let mut obj = into_object(raw)?;
        let total = required_u64(&obj, "total")?;
        let has_next_page = match optional_bool(&obj, "has_more")? {
            Some(flag) => flag,
            None => {
                let page = required_u64(&obj, "page")?;
                let total_pages = optional_u64(&obj, "total_pages")?
                    .unwrap_or_else(|| total.div_ceil(u64::from(self.page_size)));
                page < total_pages
            }
        };
        let items = items(&mut obj, &self.items_key)?;
        Ok(PageResult::new(items, total, has_next_page))
    }

    fn next_page_param(&self, last: &PageResult<T>, all: &[PageResult<T>]) -> Option<u32> {
        if !last.has_next_page {
            return None;
        }
        u32::try_from(all.len()).ok()?.checked_add(1)
    }
}

#[cfg(test)]
#[path = "page_number_tests.rs"]
mod tests;
