use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use shared::StudioError;

use crate::store::image_store::StoreError;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Studio(#[from] StudioError),
    #[error("Threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),
    #[error("Creativity must be between 1 and 10, got {0}")]
    InvalidCreativity(u8),
    #[error("Unknown image: {0}")]
    UnknownImage(String),
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("Invalid multipart payload: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),
    #[error("No image part found in upload")]
    NoImagePart,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Studio(_)
            | ApiError::InvalidThreshold(_)
            | ApiError::InvalidCreativity(_)
            | ApiError::Multipart(_)
            | ApiError::NoImagePart => StatusCode::BAD_REQUEST,
            ApiError::UnknownImage(_) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::InvalidFormat(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Store(StoreError::FileTooLarge(_)) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Store(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("Rejected request: {}", self);
        }
        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            ApiError::from(StudioError::MissingInput("text")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UnknownImage("ab".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::InvalidFormat("text/plain".into())).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ApiError::from(StoreError::FileTooLarge(10)).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }
}
