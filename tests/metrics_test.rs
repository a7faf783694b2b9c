use axum::body::Body;
use axum::http::{Request, StatusCode};
use delaybox::api::create_api_server;
use delaybox::metrics::{install_recorder, MetricsConfig};
use http_body_util::BodyExt;
use tower::Service;

async fn get(app: &mut axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.call(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).to_string())
}

#[tokio::test]
async fn test_metrics_endpoint_reports_requests() {
    let mut app = create_api_server();

    let (status, _) = get(&mut app, "/metrics").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    install_recorder(&MetricsConfig::default()).unwrap();
    // Second install returns the same handle
    install_recorder(&MetricsConfig::default()).unwrap();

    assert_eq!(get(&mut app, "/data/1kb").await.0, StatusCode::OK);
    assert_eq!(get(&mut app, "/data/nope").await.0, StatusCode::BAD_REQUEST);
    assert_eq!(get(&mut app, "/latency/1ms").await.0, StatusCode::OK);

    let (status, body) = get(&mut app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("delaybox_requests_total"));
    assert!(body.contains("delaybox_rejected_total"));
    assert!(body.contains("reason=\"parse\""));
    assert!(body.contains("delaybox_payload_bytes"));
    assert!(body.contains("delaybox_wait_seconds"));
}
