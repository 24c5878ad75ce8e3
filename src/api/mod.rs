//! HTTP API module for the longest pair service.
//!
//! This module provides the REST endpoints for uploading work interval files
//! and fetching their processed results.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FILE_FIELD, PATTERN_FIELD, UploadForm, UploadQuery};
pub use response::{ApiError, ApiErrorResponse, UploadResponse};
pub use state::AppState;
