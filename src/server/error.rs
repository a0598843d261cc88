use crate::domain::model::MessageBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Failures surfaced to HTTP clients as `{"message": ...}`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Failed to load places.")]
    LoadPlaces,

    #[error("Failed to load user places.")]
    LoadUserPlaces,

    #[error("Failed to update user places.")]
    UpdateUserPlaces,

    #[error("Invalid data format. Expected an array of places.")]
    InvalidPayload,

    #[error("404 - Not Found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::LoadPlaces | ApiError::LoadUserPlaces | ApiError::UpdateUserPlaces => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageBody {
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
