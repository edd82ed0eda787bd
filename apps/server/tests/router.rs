use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use curp::domain::config::{ApiConfig, SslConfig};
use curp_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

fn server() -> Server {
    Server::builder().port(0).build().expect("server builds without TLS")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_lists_registered_slices() {
    let response = server()
        .router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "up");
    assert_eq!(json["features"], json!(["Analyzer"]));
}

#[tokio::test]
async fn analizar_is_mounted() {
    let request = Request::builder()
        .method("POST")
        .uri("/analizar")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "curp": "1234800101HDFRRL01" }).to_string()))
        .unwrap();

    let response = server().router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mensaje"], "The CURP has an incorrect format.");
    assert_eq!(json["tokens"][0], "12");
}

#[tokio::test]
async fn docs_ui_embeds_the_openapi_document() {
    let response = server()
        .router()
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8_lossy(&bytes);
    assert!(html.contains("/analizar"));
    assert!(html.contains("/health"));
}

#[test]
fn missing_certificate_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(SslConfig { cert: dir.path().join("cert.pem"), key: dir.path().join("key.pem") });

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}
