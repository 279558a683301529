// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page adapters: per-backend strategies for paginated fetching.
//!
//! A [`PageAdapter`] knows how one backend lays out its page URLs and page
//! responses. Adapters are pure: the same inputs always produce the same URL
//! and the same parse result, which is what lets the pager cache them.

mod cursor;
mod offset;
mod page_number;

pub use cursor::{Continuation, CursorAdapter};
pub use offset::OffsetAdapter;
pub use page_number::PageNumberAdapter;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sk_core::{ContractError, Filters, PageResult};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Errors constructing a page adapter
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("base URL cannot carry a path: {0}")]
    CannotBeABase(String),
    #[error("page size must be positive")]
    ZeroPageSize,
}

/// Strategy translating filters + cursor into a request URL, and a raw
/// response into a [`PageResult`].
pub trait PageAdapter: Send + Sync + 'static {
    type Item: Send + Sync + 'static;
    /// Pagination token; opaque to the pager
    type Cursor: Clone + fmt::Debug + PartialEq + Send + Sync + 'static;

    /// Cursor meaning "no pages fetched yet"
    fn initial_page_param(&self) -> Self::Cursor;

    /// Request URL for one page. Must be deterministic.
    fn build_url(&self, filters: &Filters, cursor: &Self::Cursor) -> String;

    /// Interpret a raw backend response
    fn parse_response(&self, raw: Value) -> Result<PageResult<Self::Item>, ContractError>;

    /// Cursor of the page after `last`, or `None` once the backend is exhausted
    fn next_page_param(
        &self,
        last: &PageResult<Self::Item>,
        all: &[PageResult<Self::Item>],
    ) -> Option<Self::Cursor>;
}

/// Base URL plus resource path shared by the concrete adapters
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    base: Url,
    resource: Vec<String>,
}

impl Endpoint {
    pub(crate) fn new(base_url: &str, resource: &str) -> Result<Self, AdapterError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(AdapterError::CannotBeABase(base_url.to_string()));
        }
        let resource = resource
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self { base, resource })
    }

    /// Last resource segment, the conventional name of the items array
    pub(crate) fn resource_name(&self) -> &str {
        self.resource.last().map(String::as_str).unwrap_or("items")
    }

    /// Render `{base}/{resource}/{extra...}?{query}`
    pub(crate) fn url(&self, extra: &[&str], query: &[(&str, &str)]) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(self.resource.iter())
                .extend(extra.iter());
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        url.into()
    }
}

// ── Response shape helpers ──────────────────────────────────────────────────

/// Owned object map, so items can be moved out without cloning
pub(crate) fn into_object(raw: Value) -> Result<Map<String, Value>, ContractError> {
    match raw {
        Value::Object(map) => Ok(map),
        _ => Err(ContractError::NotAnObject),
    }
}

pub(crate) fn required_u64(obj: &Map<String, Value>, field: &str) -> Result<u64, ContractError> {
    optional_u64(obj, field)?.ok_or_else(|| ContractError::MissingField(field.to_string()))
}

pub(crate) fn optional_u64(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<u64>, ContractError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or_else(|| ContractError::WrongType {
            field: field.to_string(),
            expected: "unsigned integer",
        }),
    }
}

pub(crate) fn optional_bool(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<bool>, ContractError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_bool().map(Some).ok_or_else(|| ContractError::WrongType {
            field: field.to_string(),
            expected: "boolean",
        }),
    }
}

pub(crate) fn optional_string(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, ContractError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ContractError::WrongType {
            field: field.to_string(),
            expected: "string",
        }),
    }
}

/// Decode the items array, reporting the first item that does not fit `T`
pub(crate) fn items<T: DeserializeOwned>(
    obj: &mut Map<String, Value>,
    field: &str,
) -> Result<Vec<T>, ContractError> {
    let raw = match obj.remove(field) {
        Some(Value::Array(values)) => values,
        Some(_) => {
            return Err(ContractError::WrongType {
                field: field.to_string(),
                expected: "array",
            })
        }
        None => return Err(ContractError::MissingField(field.to_string())),
    };
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| ContractError::Item {
                field: field.to_string(),
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
