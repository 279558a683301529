// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sk feed`: page through a skip/limit API

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use sk_adapters::{HttpFetchAdapter, OffsetAdapter, TracedFetch};
use sk_core::{Filters, CATEGORY_FILTER, SEARCH_FILTER};
use sk_engine::{Pager, PagerConfig};

use crate::output::{cell, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct FeedArgs {
    /// Resource path under the API base URL
    #[arg(long, default_value = "products")]
    pub resource: String,

    /// Full-text search (takes precedence over --category)
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Field to sort by
    #[arg(long = "sort-by")]
    pub sort_by: Option<String>,

    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Number of pages to load
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Items per page (overrides SK_PAGE_SIZE)
    #[arg(long = "page-size", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// API base URL (overrides SK_API_BASE_URL)
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// JSON shape of `sk feed -o json`
#[derive(Debug, Serialize)]
struct FeedOutput<'a> {
    pages: usize,
    total: Option<u64>,
    has_more: bool,
    items: Vec<&'a Value>,
}

/// Filter set for the pager from the command-line flags
pub fn filters(args: &FeedArgs) -> Filters {
    let mut filters = Filters::new();
    if let Some(search) = &args.search {
        filters.set(SEARCH_FILTER, search.as_str());
    }
    if let Some(category) = &args.category {
        filters.set(CATEGORY_FILTER, category.as_str());
    }
    if let Some(sort_by) = &args.sort_by {
        filters.set("sortBy", sort_by.as_str());
    }
    if let Some(order) = args.order {
        filters.set("order", order.as_str());
    }
    filters
}

/// Env configuration with command-line overrides applied
pub fn config(args: &FeedArgs) -> PagerConfig {
    let mut config = PagerConfig::from_env();
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }
    config
}

pub async fn handle(args: FeedArgs, format: OutputFormat) -> Result<()> {
    let config = config(&args);
    let adapter = OffsetAdapter::<Value>::new(
        &config.base_url,
        &args.resource,
        u64::from(config.page_size),
    )
    .with_context(|| format!("cannot page {} at {}", args.resource, config.base_url))?;
    let fetch = TracedFetch::new(HttpFetchAdapter::new()?);
    let mut pager = Pager::new(adapter, fetch);

    pager.fetch_first_page(filters(&args)).await?;
    let mut loaded = 1;
    while loaded < args.pages && pager.fetch_next_page().await? {
        loaded += 1;
    }

    match format {
        OutputFormat::Text => {
            let mut table = Table::new(vec![Column::right("ID"), Column::left("TITLE").with_max(60)]);
            for item in pager.items() {
                table.row(vec![
                    cell(item.get("id")),
                    cell(item.get("title").or_else(|| item.get("name"))),
                ]);
            }
            table.render(&mut std::io::stdout())?;
            println!("{}", summary(pager.item_count(), pager.total(), pager.has_next_page()));
        }
        OutputFormat::Json => {
            print_json(&FeedOutput {
                pages: pager.pages().len(),
                total: pager.total(),
                has_more: pager.has_next_page(),
                items: pager.items().collect(),
            })?;
        }
    }
    Ok(())
}

/// Footer line under the text listing
pub fn summary(shown: usize, total: Option<u64>, has_more: bool) -> String {
    let total = total.map_or_else(|| "?".to_string(), |t| t.to_string());
    if has_more {
        format!("Showing {shown} of {total} (more available, use --pages)")
    } else {
        format!("Showing {shown} of {total}")
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
