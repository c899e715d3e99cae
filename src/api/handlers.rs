//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_monthly, compute_summary};
use crate::models::SummaryInput;
use crate::report::{build_report, export_csv};
use crate::snapshot::FormSnapshot;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/form", post(calculate_form_handler))
        .route("/export", post(export_handler))
        .route(
            "/snapshot",
            get(load_snapshot_handler)
                .put(save_snapshot_handler)
                .delete(clear_snapshot_handler),
        )
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps an engine error to its JSON error response.
fn error_response(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Validates the input, runs the summary pass and wraps the result.
fn calculation_response(state: &AppState, correlation_id: Uuid, input: SummaryInput) -> Response {
    if let Err(err) = input.validate() {
        return error_response(correlation_id, err);
    }

    let start_time = Instant::now();
    let summary = compute_summary(&input);
    let workload_label = state
        .config()
        .defaults()
        .workload_label(input.payroll.workload_divisor);
    let report = build_report(&input.payroll, &summary.monthly, &workload_label);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        gross_salary = %summary.monthly.gross_salary,
        net_salary = %summary.monthly.net_salary,
        warnings = summary.warnings.len(),
        duration_us,
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        summary,
        report,
        duration_us,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /calculate.
///
/// Accepts a typed calculation request; omitted optional fields take the
/// configured defaults.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input = request.into_summary_input(state.config().defaults());
    calculation_response(&state, correlation_id, input)
}

/// Handler for POST /calculate/form.
///
/// Accepts the raw form text and runs it through the normalizer first.
async fn calculate_form_handler(
    State(state): State<AppState>,
    payload: Result<Json<FormSnapshot>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing form calculation request");

    let snapshot = match payload {
        Ok(Json(snapshot)) => snapshot,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input = snapshot.to_summary_input(state.config().defaults());
    calculation_response(&state, correlation_id, input)
}

/// Handler for POST /export.
///
/// Returns the monthly payslip as CSV.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let defaults = state.config().defaults();
    let input = request.into_summary_input(defaults);
    if let Err(err) = input.payroll.validate() {
        return error_response(correlation_id, err);
    }

    let result = compute_monthly(&input.payroll);
    let workload_label = defaults.workload_label(input.payroll.workload_divisor);
    let report = build_report(&input.payroll, &result, &workload_label);

    match export_csv(&report) {
        Ok(csv) => {
            info!(
                correlation_id = %correlation_id,
                rows = report.earnings.len() + report.deductions.len(),
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"folha.csv\"",
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /snapshot.
///
/// Returns the stored form, or the cleared form when nothing is stored.
async fn load_snapshot_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let defaults = state.config().defaults();

    match state.store().load(&defaults.storage_key) {
        Ok(snapshot) => {
            let snapshot = snapshot.unwrap_or_else(|| FormSnapshot::cleared(defaults));
            (StatusCode::OK, Json(snapshot)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /snapshot.
async fn save_snapshot_handler(
    State(state): State<AppState>,
    payload: Result<Json<FormSnapshot>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let snapshot = match payload {
        Ok(Json(snapshot)) => snapshot,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let key = &state.config().defaults().storage_key;
    match state.store().save(key, &snapshot) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, key = %key, "Snapshot saved");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /snapshot.
///
/// Clears the stored form and returns the cleared one.
async fn clear_snapshot_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let defaults = state.config().defaults();

    match state.store().clear(&defaults.storage_key) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Snapshot cleared");
            (StatusCode::OK, Json(FormSnapshot::cleared(defaults))).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}
