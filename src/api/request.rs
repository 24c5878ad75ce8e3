//! Request types for the longest pair API.
//!
//! This module defines the query parameters of the upload endpoint and reads
//! the multipart upload form.

use axum::body::Bytes;
use axum::extract::Multipart;
use serde::{Deserialize, Serialize};

use super::response::{ApiError, ApiErrorResponse};

/// Multipart field holding the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Multipart field or query parameter holding the date pattern.
pub const PATTERN_FIELD: &str = "pattern";

/// Query parameters accepted by the upload endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadQuery {
    /// Date pattern for the uploaded file.
    #[serde(default)]
    pub pattern: Option<String>,
}

impl UploadQuery {
    /// Returns the trimmed pattern, treating a blank value as absent.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// The fields of an upload form.
#[derive(Debug, Clone)]
pub struct UploadForm {
    /// The original file name, used as the storage key.
    pub file_name: String,
    /// Raw file content.
    pub content: Bytes,
    /// Date pattern sent as a form field, if any.
    pub pattern: Option<String>,
}

impl UploadForm {
    /// Reads the `file` and optional `pattern` fields from a multipart body.
    ///
    /// Unknown fields are skipped. Blank patterns count as absent.
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiErrorResponse> {
        let mut file: Option<(String, Bytes)> = None;
        let mut pattern: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(FILE_FIELD) => {
                    let file_name = field
                        .file_name()
                        .map(str::trim)
                        .filter(|n| !n.is_empty())
                        .map(str::to_string)
                        .ok_or_else(|| {
                            ApiErrorResponse::bad_request(ApiError::validation_error(
                                "uploaded file has no file name",
                            ))
                        })?;
                    let content = field.bytes().await.map_err(multipart_error)?;
                    file = Some((file_name, content));
                }
                Some(PATTERN_FIELD) => {
                    let text = field.text().await.map_err(multipart_error)?;
                    let text = text.trim();
                    if !text.is_empty() {
                        pattern = Some(text.to_string());
                    }
                }
                _ => {}
            }
        }

        let (file_name, content) = file
            .ok_or_else(|| ApiErrorResponse::bad_request(ApiError::missing_field(FILE_FIELD)))?;

        Ok(Self {
            file_name,
            content,
            pattern,
        })
    }
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiErrorResponse {
    ApiErrorResponse {
        status: err.status(),
        error: ApiError::malformed_upload(err.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_query_pattern_is_optional() {
        let query: UploadQuery = serde_json::from_str("{}").unwrap();
        assert!(query.pattern.is_none());

        let query: UploadQuery = serde_json::from_str(r#"{"pattern":"dd/MM/yyyy"}"#).unwrap();
        assert_eq!(query.pattern.as_deref(), Some("dd/MM/yyyy"));
    }

    #[test]
    fn test_upload_query_pattern_is_trimmed() {
        let query = UploadQuery {
            pattern: Some("  dd/MM/yyyy \t".to_string()),
        };
        assert_eq!(query.pattern(), Some("dd/MM/yyyy"));

        let blank = UploadQuery {
            pattern: Some("   ".to_string()),
        };
        assert_eq!(blank.pattern(), None);
    }
}
