//! HTTP request handlers for the longest pair API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, Path, Query, State, multipart::MultipartRejection,
    },
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::process;
use crate::error::EngineError;
use crate::models::LongestPairSummary;

use super::request::{UploadForm, UploadQuery};
use super::response::{ApiError, ApiErrorResponse, UploadResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// Cross-origin requests are allowed from the configured origins only.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config().server.max_upload_bytes;

    let router = Router::new()
        .route("/api/attachments/upload", post(upload_handler))
        .route("/api/attachments/:file_name", get(pairs_handler))
        .route("/api/attachments/:file_name/summary", get(summary_handler))
        .layer(DefaultBodyLimit::max(body_limit));

    let router = match cors_layer(&state.config().server.allowed_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.with_state(state)
}

/// Builds the CORS layer, or `None` when no origin is allowed.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|origin| {
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin.escape_debug(), "Ignoring invalid allowed origin");
                    None
                }
            }
        }))
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any),
    )
}

/// Handler for POST /api/attachments/upload.
///
/// Processes the uploaded file, stores the result under the file name and
/// returns the longest pair summary.
async fn upload_handler(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Upload is not a multipart form"
            );
            return ApiErrorResponse::bad_request(ApiError::malformed_upload(rejection.body_text()))
                .into_response();
        }
    };

    let upload = match UploadForm::read(multipart).await {
        Ok(upload) => upload,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                code = %err.error.code,
                error = %err.error.message,
                "Rejected upload"
            );
            return err.into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        file_name = %upload.file_name,
        size_bytes = upload.content.len(),
        "Successfully loaded file"
    );

    let pattern = upload
        .pattern
        .or_else(|| query.pattern().map(str::to_string))
        .unwrap_or_else(|| state.default_date_pattern().to_string());
    let raw = String::from_utf8_lossy(&upload.content).into_owned();

    let start_time = Instant::now();
    let task_pattern = pattern.clone();
    let processed = tokio::task::spawn_blocking(move || process(&raw, &task_pattern)).await;

    match processed {
        Ok(Ok(result)) => {
            log_summary(correlation_id, &upload.file_name, &result.summary);
            info!(
                correlation_id = %correlation_id,
                file_name = %upload.file_name,
                pattern = %pattern,
                pairs_count = result.pairs.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Processing completed successfully"
            );

            let response = UploadResponse {
                file_name: upload.file_name.clone(),
                pairs_count: result.pairs.len(),
                summary: result.summary.clone(),
            };
            state.store().put(&upload.file_name, result);

            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                file_name = %upload.file_name,
                pattern = %pattern,
                error = %err,
                "Processing failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
        Err(join_err) => {
            error!(
                correlation_id = %correlation_id,
                file_name = %upload.file_name,
                error = %join_err,
                "Processing task did not complete"
            );
            ApiErrorResponse::internal(ApiError::internal_error("Processing did not complete"))
                .into_response()
        }
    }
}

/// Handler for GET /api/attachments/:file_name.
///
/// Returns the stored pair records for a previously uploaded file.
async fn pairs_handler(State(state): State<AppState>, Path(file_name): Path<String>) -> Response {
    match state.store().get(&file_name) {
        Some(result) => (StatusCode::OK, Json(result.pairs)).into_response(),
        None => not_found(file_name),
    }
}

/// Handler for GET /api/attachments/:file_name/summary.
async fn summary_handler(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Response {
    match state.store().get(&file_name) {
        Some(result) => (StatusCode::OK, Json(result.summary)).into_response(),
        None => not_found(file_name),
    }
}

fn not_found(file_name: String) -> Response {
    ApiErrorResponse::from(EngineError::ResultNotFound { key: file_name }).into_response()
}

/// Logs the longest pair outcome for operators.
fn log_summary(correlation_id: Uuid, file_name: &str, summary: &LongestPairSummary) {
    match summary {
        LongestPairSummary::Undetermined => warn!(
            correlation_id = %correlation_id,
            file_name = %file_name,
            "{}",
            summary
        ),
        LongestPairSummary::NoOverlap => info!(
            correlation_id = %correlation_id,
            file_name = %file_name,
            "{}",
            summary
        ),
        LongestPairSummary::BestPair {
            employee_a,
            employee_b,
            total_days,
        } => info!(
            correlation_id = %correlation_id,
            file_name = %file_name,
            employee_a = %employee_a,
            employee_b = %employee_b,
            total_days = total_days,
            "{}",
            summary
        ),
    }
}
