//! Request handlers for the API endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::{error, info, warn};

use super::types::{ErrorResponse, INFEASIBLE, INTERNAL, MISSING_FIELDS};
use crate::plan::{LoadRequest, PlanError};
use crate::request::RequestError;

/// Computes a production plan for the posted payload.
///
/// `POST /productionplan` → 200 + `[{"name", "p"}]` JSON
/// missing `load`/`fuels`/`powerplants` → 400 + `ErrorResponse`
/// infeasible load → 400 + `ErrorResponse`
/// malformed payload → 500 + generic `ErrorResponse`
pub async fn production_plan(Json(payload): Json<Value>) -> Response {
    let request = match LoadRequest::from_value(payload) {
        Ok(request) => request,
        Err(RequestError::MissingFields(fields)) => {
            warn!(?fields, "rejected request with missing fields");
            return error_response(StatusCode::BAD_REQUEST, MISSING_FIELDS);
        }
        Err(e) => {
            error!(error = %e, "unexpected error during production plan calculation");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL);
        }
    };

    match request.plan() {
        Ok(plan) => Json(plan).into_response(),
        Err(e @ PlanError::Infeasible { .. }) => {
            info!(error = %e, "load cannot be met");
            error_response(StatusCode::BAD_REQUEST, INFEASIBLE)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
