// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pager: accumulates pages from one backend under one filter set.
//!
//! The pager owns a [`PageAdapter`] (URL layout and response shape) and a
//! [`FetchAdapter`] (transport). Fetches take `&mut self`, so a pager never
//! has two requests in flight. A failed fetch leaves the loaded pages as they
//! were; nothing is retried.

use crate::error::PagerError;
use sk_adapters::{FetchAdapter, PageAdapter};
use sk_core::{Filters, PageResult};

/// Pages loaded for the current filters
struct Loaded<P: PageAdapter> {
    filters: Filters,
    pages: Vec<PageResult<P::Item>>,
}

pub struct Pager<P: PageAdapter, F> {
    adapter: P,
    fetch: F,
    loaded: Option<Loaded<P>>,
}

impl<P, F> Pager<P, F>
where
    P: PageAdapter,
    F: FetchAdapter,
{
    pub fn new(adapter: P, fetch: F) -> Self {
        Self {
            adapter,
            fetch,
            loaded: None,
        }
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// Load the first page for `filters`, replacing whatever was loaded.
    ///
    /// Issues no request when the same filters are already loaded.
    pub async fn fetch_first_page(&mut self, filters: Filters) -> Result<(), PagerError> {
        if self.loaded.as_ref().is_some_and(|l| l.filters == filters) {
            tracing::debug!("first page already loaded for these filters");
            return Ok(());
        }
        self.load_first(filters).await
    }

    /// Reload the first page for the current filters, dropping later pages.
    ///
    /// Without loaded filters this loads the unfiltered first page.
    pub async fn refetch(&mut self) -> Result<(), PagerError> {
        let filters = self.filters().cloned().unwrap_or_default();
        self.load_first(filters).await
    }

    /// Fetch and append the next page.
    ///
    /// Returns `Ok(false)` without a request when nothing is loaded yet or
    /// the backend is exhausted.
    pub async fn fetch_next_page(&mut self) -> Result<bool, PagerError> {
        let Some(cursor) = self.next_page_param() else {
            return Ok(false);
        };
        let Some(loaded) = self.loaded.as_ref() else {
            return Ok(false);
        };
        let url = self.adapter.build_url(&loaded.filters, &cursor);
        let page = self.load(&url).await?;
        let pages = match self.loaded.as_mut() {
            Some(loaded) => {
                loaded.pages.push(page);
                loaded.pages.len()
            }
            None => return Ok(false),
        };
        tracing::debug!(?cursor, pages, "appended page");
        Ok(true)
    }

    /// Cursor of the next page, if there is one
    pub fn next_page_param(&self) -> Option<P::Cursor> {
        let loaded = self.loaded.as_ref()?;
        let last = loaded.pages.last()?;
        self.adapter.next_page_param(last, &loaded.pages)
    }

    /// Every loaded item, in fetch order
    pub fn items(&self) -> impl Iterator<Item = &P::Item> + '_ {
        self.pages().iter().flat_map(|page| page.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.pages().iter().map(|page| page.items.len()).sum()
    }

    pub fn pages(&self) -> &[PageResult<P::Item>] {
        self.loaded
            .as_ref()
            .map(|l| l.pages.as_slice())
            .unwrap_or_default()
    }

    /// Whether the latest page reported more data
    pub fn has_next_page(&self) -> bool {
        self.pages().last().is_some_and(|page| page.has_next_page)
    }

    /// Total reported by the latest page
    pub fn total(&self) -> Option<u64> {
        self.pages().last().map(|page| page.total)
    }

    pub fn filters(&self) -> Option<&Filters> {
        self.loaded.as_ref().map(|l| &l.filters)
    }

    /// Forget every loaded page
    pub fn reset(&mut self) {
        self.loaded = None;
    }

    async fn load_first(&mut self, filters: Filters) -> Result<(), PagerError> {
        let cursor = self.adapter.initial_page_param();
        let url = self.adapter.build_url(&filters, &cursor);
        let page = self.load(&url).await?;
        tracing::debug!(items = page.items.len(), total = page.total, "loaded first page");
        self.loaded = Some(Loaded {
            filters,
            pages: vec![page],
        });
        Ok(())
    }

    async fn load(&self, url: &str) -> Result<PageResult<P::Item>, PagerError> {
        let raw = self.fetch.fetch(url).await?;
        self.adapter.parse_response(raw).map_err(|source| {
            tracing::error!(url, error = %source, "page response rejected");
            PagerError::Contract {
                url: url.to_string(),
                source,
            }
        })
    }
}

#[cfg(test)]
#[path = "pager_tests.rs"]
mod tests;
