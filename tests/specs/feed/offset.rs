//! Skip/limit adapter specs

use crate::prelude::*;
use serde_json::Value;
use sk_adapters::{OffsetAdapter, PageAdapter};
use sk_core::PageResult;

fn adapter() -> OffsetAdapter<Value> {
    OffsetAdapter::new("https://dummyjson.com", "products", 20).unwrap()
}

#[test]
fn consecutive_pages_differ_only_in_skip() {
    let a = adapter();
    let first = a.build_url(&Filters::new(), &0);
    let second = a.build_url(&Filters::new(), &20);
    assert_eq!(first.replace("skip=0", "skip=20"), second);
}

#[test]
fn search_routes_to_search_endpoint() {
    let url = adapter().build_url(&Filters::new().with("search", "phone"), &0);
    assert!(url.starts_with("https://dummyjson.com/products/search?q=phone"), "{url}");
}

#[test]
fn next_offset_stops_at_total() {
    let a = adapter();
    let page: PageResult<Value> = PageResult::new(vec![Value::Null; 20], 40, true);
    assert_eq!(a.next_page_param(&page, std::slice::from_ref(&page)), Some(20));

    let pages = vec![page.clone(), page.clone()];
    assert_eq!(a.next_page_param(&page, &pages), None);
}
