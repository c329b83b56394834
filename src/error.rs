use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Client-facing failures of the upload simulator. Every other endpoint is a
/// total function over its inputs and has no error path.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Maximum {0} files allowed per batch")]
    TooManyFiles(usize),

    #[error("File {0} too large")]
    FileTooLarge(String),

    #[error("File {0} is not an image")]
    NotAnImage(String),

    #[error("Invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            ApiError::TooManyFiles(_) => (StatusCode::BAD_REQUEST, "too_many_files"),
            ApiError::FileTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "file_too_large"),
            ApiError::NotAnImage(_) => (StatusCode::BAD_REQUEST, "not_an_image"),
            ApiError::Multipart(_) => (StatusCode::BAD_REQUEST, "invalid_multipart"),
        };

        let body = Json(json!({
            "error": code,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
