// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn assert_clone<T: Clone>() {}
fn assert_send<T: Send>() {}
fn assert_sync<T: Sync>() {}

#[test]
fn http_fetch_adapter_is_clone_send_sync() {
    assert_clone::<HttpFetchAdapter>();
    assert_send::<HttpFetchAdapter>();
    assert_sync::<HttpFetchAdapter>();
}

#[test]
fn user_agent_names_crate_version() {
    assert!(HttpFetchAdapter::user_agent().starts_with("sk/"));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let adapter = HttpFetchAdapter::new().unwrap();
    // Port 9 (discard) on localhost is closed in test environments.
    let result = adapter.fetch("http://127.0.0.1:9/products").await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn malformed_url_is_transport_error() {
    let adapter = HttpFetchAdapter::new().unwrap();
    let result = adapter.fetch("not a url").await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
}

/// Serve one canned HTTP response on a local port, returning its base URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn success_body_is_decoded() {
    let base = serve_once("200 OK", r#"{"products":[],"total":0,"skip":0}"#).await;
    let value = HttpFetchAdapter::new()
        .unwrap()
        .fetch(&format!("{base}/products"))
        .await
        .unwrap();
    assert_eq!(value["total"], 0);
}

#[tokio::test]
async fn non_success_status_keeps_body() {
    let base = serve_once("503 Service Unavailable", "down for maintenance").await;
    let err = HttpFetchAdapter::new()
        .unwrap()
        .fetch(&format!("{base}/products"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        FetchError::Status {
            status: 503,
            body: "down for maintenance".into()
        }
    );
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
    let base = serve_once("200 OK", "<html>").await;
    let err = HttpFetchAdapter::new()
        .unwrap()
        .fetch(&format!("{base}/products"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
}
