#![cfg(feature = "server")]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use curp_analysis::api::router;
use curp_kernel::domain::config::ApiConfig;
use curp_kernel::server::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(with_slice: bool) -> axum::Router {
    let mut builder = ApiState::builder().config(ApiConfig::default());
    if with_slice {
        builder = builder.register_slice(curp_analysis::init().unwrap());
    }
    let state = builder.build().unwrap();
    let (router, _api): (axum::Router, _) = router().with_state(state).split_for_parts();
    router
}

async fn post(router: axum::Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/analizar")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn analyzes_valid_code() {
    let (status, body) = post(app(true), json!({ "curp": " gomj800101hdfrrl01 " }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "The CURP is valid, correct format.");
    assert_eq!(body["tokens"].as_array().map(Vec::len), Some(12));
    assert_eq!(body["descripcion"][6], "Male");
    assert_eq!(body["total_letras"], 10);
    assert_eq!(body["total_numeros"], 8);
}

#[tokio::test]
async fn shape_error_is_still_ok() {
    let (status, body) = post(app(true), json!({ "curp": "AB12" }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokens"], json!([]));
    assert_eq!(body["descripcion"], json!([]));
    assert_eq!(
        body["mensaje"],
        "The CURP is invalid: it must be exactly 18 uppercase alphanumeric characters."
    );
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let (status, _) = post(app(true), json!({ "code": "AB12" }).to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unregistered_slice_is_an_internal_error() {
    let (status, body) = post(app(false), json!({ "curp": "AB12" }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap_or_default().contains("Analyzer"));
}

#[test]
fn init_creates_slice() {
    let slice = curp_analysis::init().expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<curp_analysis::Analyzer>());
    assert_eq!(slice.name(), "Analyzer");
}
