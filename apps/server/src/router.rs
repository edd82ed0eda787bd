use axum::Router;
use curp::kernel::prelude::ApiState;
use curp::server::router::{analysis_router, system_router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(
    title = "CURP Analyzer",
    description = "Structural validation and field breakdown of Mexican CURP codes"
))]
struct ApiDoc;

/// Path of the Scalar UI.
pub(crate) const DOCS_PATH: &str = "/api";

pub(crate) fn init(state: ApiState) -> Router {
    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .merge(analysis_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(openapi_routes).merge(Scalar::with_url(DOCS_PATH, api_doc))
}
