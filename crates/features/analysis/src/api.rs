//! HTTP surface of the analysis slice.

use crate::Analyzer;
use crate::error::AnalysisError;
use crate::model::{AnalyzeRequest, AnalyzeResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use curp_derive::{api_handler, api_model};
use curp_kernel::domain::constants::ANALYSIS_TAG;
use curp_kernel::safe_nanoid;
use curp_kernel::server::ApiState;
use tracing::{debug, error};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_model]
/// Error payload
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        // Shape failures are reported as a 200 outcome, never through this path.
        match &self {
            Self::Shape { .. } => error!(error = %self, "Unexpected shape error in request"),
            Self::Internal { .. } => error!(error = %self, "Analysis request failed"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: self.to_string() }))
            .into_response()
    }
}

#[api_handler(
    post,
    path = "/analizar",
    request_body = AnalyzeRequest,
    responses(
        (status = OK, description = "Analysis of the submitted CURP", body = AnalyzeResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Body is not an object with a `curp` string"),
        (status = INTERNAL_SERVER_ERROR, description = "Analysis slice is not registered", body = ErrorBody),
    ),
    tag = ANALYSIS_TAG,
)]
pub(crate) async fn analyze_handler(
    State(state): State<ApiState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AnalysisError> {
    let analyzer = state.try_get_slice::<Analyzer>().map_err(|err| AnalysisError::Internal {
        message: err.to_string().into(),
        context: Some("resolving analyzer".into()),
    })?;

    let request_id = safe_nanoid!();
    let report = analyzer.analyze(&request.curp);
    debug!(
        %request_id,
        outcome = report.outcome.as_str(),
        letters = report.total_letters,
        digits = report.total_digits,
        "CURP analyzed"
    );

    Ok(Json(report.into()))
}

/// Routes of the analysis slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(analyze_handler))
}
