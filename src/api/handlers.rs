//! HTTP request handlers for the shift API.
//!
//! This module contains the handler functions for all endpoints. The
//! handlers are thin: they inject the process clock, translate engine
//! refusals into HTTP responses and log with a per-request correlation id.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::service::{BatchShiftItem, ShiftDraft, ShiftPatch, ShiftQueryOptions, SortOrder};
use crate::store::ShiftFilter;

use super::request::ClockActionRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts", post(create_shift).get(list_shifts))
        .route("/shifts/batch", post(reconcile_shifts))
        .route("/shifts/:id", patch(update_shift).delete(delete_shift))
        .route("/shifts/:id/cancel", post(cancel_shift))
        .route("/shifts/:id/clock-in", post(clock_in_shift))
        .route("/shifts/:id/clock-out", post(clock_out_shift))
        .route("/workers/:worker_id/shifts", get(list_worker_shifts))
        .with_state(state)
}

/// The current process clock, as the naive local instant the engine works
/// with.
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Translates an engine refusal into its HTTP response, logging it.
fn refuse(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = error.error_code(),
        error = %error,
        "Request refused"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Translates a JSON extraction failure into a 400 response.
fn reject_body(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
            ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for `POST /shifts`.
async fn create_shift(
    State(state): State<AppState>,
    payload: Result<Json<ShiftDraft>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift create");

    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => return reject_body(correlation_id, rejection),
    };

    match state.service().create(draft, now()).await {
        Ok(view) => {
            info!(correlation_id = %correlation_id, shift_id = %view.id, "Shift created");
            (StatusCode::CREATED, Json(view)).into_response()
        }
        Err(error) => refuse(correlation_id, error),
    }
}

/// Handler for `GET /shifts`, the administrator listing.
///
/// Defaults to newest-first (date descending) when the caller does not
/// pick a sort order.
async fn list_shifts(
    State(state): State<AppState>,
    Query(options): Query<ShiftQueryOptions>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match state
        .service()
        .list_shifts(ShiftFilter::all(), &options, SortOrder::Desc)
        .await
    {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(error) => refuse(correlation_id, error),
    }
}

/// Handler for `GET /workers/{worker_id}/shifts`, the "my shifts" listing.
///
/// Defaults to upcoming-first (date ascending).
async fn list_worker_shifts(
    State(state): State<AppState>,
    Path(worker_id): Path<Uuid>,
    Query(options): Query<ShiftQueryOptions>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match state
        .service()
        .list_shifts(ShiftFilter::for_worker(worker_id), &options, SortOrder::Asc)
        .await
    {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(error) => refuse(correlation_id, error),
    }
}

/// Handler for `PATCH /shifts/{id}`.
async fn update_shift(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ShiftPatch>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, shift_id = %id, "Processing shift update");

    match state.service().update(id, patch, now()).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => refuse(correlation_id, error),
    }
}

/// Handler for `DELETE /shifts/{id}`.
async fn delete_shift(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, shift_id = %id, "Processing shift delete");

    match state.service().delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => refuse(correlation_id, error),
    }
}

/// Handler for `POST /shifts/{id}/cancel`.
async fn cancel_shift(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, shift_id = %id, "Processing shift cancel");

    match state.service().cancel(id, now()).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => refuse(correlation_id, error),
    }
}

/// Handler for `POST /shifts/{id}/clock-in`.
async fn clock_in_shift(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ClockActionRequest>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        shift_id = %id,
        worker_id = %body.user,
        "Processing clock-in"
    );

    match state.service().clock_in(id, body.user, now()).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => refuse(correlation_id, error),
    }
}

/// Handler for `POST /shifts/{id}/clock-out`.
async fn clock_out_shift(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ClockActionRequest>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        shift_id = %id,
        worker_id = %body.user,
        "Processing clock-out"
    );

    match state.service().clock_out(id, body.user, now()).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => refuse(correlation_id, error),
    }
}

/// Handler for `POST /shifts/batch`.
async fn reconcile_shifts(
    State(state): State<AppState>,
    payload: Result<Json<Vec<BatchShiftItem>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch reconcile");

    let items = match payload {
        Ok(Json(items)) => items,
        Err(rejection) => return reject_body(correlation_id, rejection),
    };

    match state.service().reconcile(items, now()).await {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                created = outcome.created.len(),
                updated = outcome.updated.len(),
                failed = outcome.errors.len(),
                "Batch reconciled"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(error) => refuse(correlation_id, error),
    }
}
