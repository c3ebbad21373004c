use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::engine::{ValuationEngine, ValuationResult};
use super::explain::get_multiple_explanation;
use super::format::format_currency;
use super::inputs::{validate_valuation_inputs, ValuationDraft};
use super::location::get_location_tier;
use super::ValuationError;

/// Currency strings ready for display next to the raw figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRange {
    pub low: String,
    pub base: String,
    pub high: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalResponse {
    pub result: ValuationResult,
    pub explanation: Vec<String>,
    pub formatted: FormattedRange,
}

impl From<ValuationResult> for AppraisalResponse {
    fn from(result: ValuationResult) -> Self {
        let explanation = get_multiple_explanation(&result.breakdown);
        let formatted = FormattedRange {
            low: format_currency(result.low as f64),
            base: format_currency(result.base as f64),
            high: format_currency(result.high as f64),
        };

        Self {
            result,
            explanation,
            formatted,
        }
    }
}

/// Router builder exposing the valuation engine over HTTP.
pub fn valuation_router(engine: Arc<ValuationEngine>) -> Router {
    Router::new()
        .route("/api/v1/valuations", post(appraise_handler))
        .route("/api/v1/valuations/validate", post(validate_handler))
        .route("/api/v1/locations/:query", get(location_handler))
        .with_state(engine)
}

pub(crate) async fn appraise_handler(
    State(engine): State<Arc<ValuationEngine>>,
    Json(draft): Json<ValuationDraft>,
) -> Response {
    match engine.appraise(draft) {
        Ok(result) => (StatusCode::OK, Json(AppraisalResponse::from(result))).into_response(),
        Err(error @ ValuationError::InvalidInputs { .. }) => {
            let payload = json!({
                "error": error.to_string(),
                "errors": error.messages(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn validate_handler(Json(draft): Json<ValuationDraft>) -> Response {
    let report = validate_valuation_inputs(&draft);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn location_handler(Path(query): Path<String>) -> Response {
    (StatusCode::OK, Json(get_location_tier(&query))).into_response()
}
