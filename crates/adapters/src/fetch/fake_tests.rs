// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[tokio::test]
async fn fake_fetch_serves_scripted_bodies_and_records_calls() {
    let fetch = FakeFetchAdapter::new();
    fetch.respond("https://api.test/a", json!({ "ok": true }));

    let body = fetch.fetch("https://api.test/a").await.unwrap();
    assert_eq!(body["ok"], true);

    let missing = fetch.fetch("https://api.test/b").await;
    assert!(matches!(missing, Err(FetchError::Status { status: 404, .. })));

    assert_eq!(fetch.calls(), vec!["https://api.test/a", "https://api.test/b"]);
}

#[tokio::test]
async fn fake_fetch_failure_can_be_rescripted() {
    let fetch = FakeFetchAdapter::new();
    fetch.fail("u", FetchError::Transport("connection reset".into()));
    assert_eq!(
        fetch.fetch("u").await,
        Err(FetchError::Transport("connection reset".into()))
    );

    fetch.respond("u", json!([]));
    assert_eq!(fetch.fetch("u").await, Ok(json!([])));
}
