//! Pager driver specs

use crate::prelude::*;
use sk_core::test_support::offset_payload;

#[tokio::test]
async fn short_first_page_requests_offset_twenty_next() {
    let (mut pager, fetch) = product_pager();
    fetch.respond(
        "https://dummyjson.com/products?limit=20&skip=0",
        offset_payload(1, 5, 100, 0, 20),
    );
    fetch.respond(
        "https://dummyjson.com/products?limit=20&skip=20",
        offset_payload(6, 20, 100, 20, 20),
    );

    pager.fetch_first_page(Filters::new()).await.unwrap();
    assert!(pager.has_next_page());
    assert!(pager.fetch_next_page().await.unwrap());

    assert_eq!(
        fetch.calls().last().map(String::as_str),
        Some("https://dummyjson.com/products?limit=20&skip=20")
    );
    assert_eq!(pager.item_count(), 25);
    let ids: Vec<u64> = pager.items().filter_map(|i| i["id"].as_u64()).collect();
    assert_eq!(ids, (1..=25).collect::<Vec<_>>());
}

#[tokio::test]
async fn total_comes_from_the_latest_page() {
    let (mut pager, fetch) = product_pager();
    fetch.respond(
        "https://dummyjson.com/products?limit=20&skip=0",
        offset_payload(1, 20, 100, 0, 20),
    );
    fetch.respond(
        "https://dummyjson.com/products?limit=20&skip=20",
        offset_payload(21, 20, 90, 20, 20),
    );

    pager.fetch_first_page(Filters::new()).await.unwrap();
    pager.fetch_next_page().await.unwrap();
    assert_eq!(pager.total(), Some(90));
}
