//! Drives a real listener over TCP to check the wire contract and that
//! slow requests do not hold up concurrent ones.

use delaybox::api::{create_api_server, LatencyResponse};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_api_server()).await.unwrap();
    });
    addr
}

/// Minimal HTTP/1.1 GET returning (status, headers, body)
async fn http_get(addr: SocketAddr, path: &str) -> (u16, String, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has a header block");
    let head = String::from_utf8_lossy(&raw[..split]).to_string();
    let body = raw[split + 4..].to_vec();
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status line");

    (status, head.to_ascii_lowercase(), body)
}

#[tokio::test]
async fn test_data_endpoint_over_tcp() {
    let addr = spawn_server().await;

    let (status, head, body) = http_get(addr, "/data/100b").await;
    assert_eq!(status, 200);
    assert!(head.contains("content-type: application/octet-stream"));
    assert!(head.contains("content-length: 100"));
    assert_eq!(body.len(), 100);
    assert!(body.iter().all(u8::is_ascii_alphabetic));

    let (status, _, _) = http_get(addr, "/data/20kb-10kb").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_latency_endpoint_over_tcp() {
    let addr = spawn_server().await;

    let start = Instant::now();
    let (status, _, body) = http_get(addr, "/latency/50ms").await;
    assert_eq!(status, 200);
    assert!(start.elapsed() >= Duration::from_millis(50));

    let latency: LatencyResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(latency.waited(), Duration::from_millis(50));

    let (status, _, _) = http_get(addr, "/latency/invalid").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_concurrent_latency_requests_overlap() {
    let addr = spawn_server().await;

    let start = Instant::now();
    let requests: Vec<_> = (0..4)
        .map(|_| tokio::spawn(http_get(addr, "/latency/500ms")))
        .collect();

    for request in requests {
        let (status, _, _) = request.await.unwrap();
        assert_eq!(status, 200);
    }

    // Serialized handling would need at least 2s
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_millis(1900), "took {elapsed:?}");
}
