// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token pagination: `{base}/{resource}?limit=S[&cursor=TOKEN]`.
//!
//! Responses look like `{ "items": [...], "total": 120, "next_cursor": "abc" }`
//! where a null or missing `next_cursor` marks the last page. An explicit
//! `has_more: true` without a cursor is rejected, since the next page could
//! never be requested.

use super::{
    into_object, items, optional_bool, optional_string, required_u64, AdapterError, Endpoint,
    PageAdapter,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sk_core::{ContractError, Filters, PageResult, SEARCH_FILTER};
use std::marker::PhantomData;

const DEFAULT_ITEMS_KEY: &str = "items";

/// Position in a token-paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Nothing fetched yet
    Start,
    /// Continue after the page that returned this token
    After(String),
}

#[derive(Debug, Clone)]
pub struct CursorAdapter<T> {
    endpoint: Endpoint,
    items_key: String,
    page_size: u32,
    _item: PhantomData<fn() -> T>,
}

impl<T> CursorAdapter<T> {
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

impl<T> PageAdapter for CursorAdapter<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    type Item = T;
    type Cursor = Continuation;

    fn initial_page_param(&self) -> Continuation {
        Continuation::Start
    }

    fn build_url(&self, filters: &Filters, cursor: &Continuation) -> String {
        let limit = self.page_size.to_string();
        let mut query = vec![("limit", limit.as_str())];
        if let Continuation::After(token) = cursor {
            query.push(("cursor", token.as_str()));
        }
        if let Some(q) = filters.search() {
            query.push(("q", q));
        }
        query.extend(filters.iter_except(&[SEARCH_FILTER]));
        self.endpoint.url(&[], &query)
    }

    fn parse_response(&self, raw: Value) -> Result<PageResult<T>, ContractError> {
        let mut obj = into_object(raw)?;
        let total = required_u64(&obj, "total")?;
        let next_cursor = optional_string(&obj, "next_cursor")?;
        let has_next_page = optional_bool(&obj, "has_more")?.unwrap_or(next_cursor.is_some());
        if has_next_page && next_cursor.is_none() {
            return Err(ContractError::MissingField("next_cursor".to_string()));
        }
        let items = items(&mut obj, &self.items_key)?;
        Ok(PageResult::new(items, total, has_next_page).with_next_token(next_cursor))
    }

    fn next_page_param(&self, last: &PageResult<T>, _all: &[PageResult<T>]) -> Option<Continuation> {
        if !last.has_next_page {
            return None;
        }
        last.next_token.clone().map(Continuation::After)
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
