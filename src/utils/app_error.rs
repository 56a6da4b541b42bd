use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::maps_client::types::maps_service_error::ApiError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Transport(_) => {
                AppError::new(StatusCode::BAD_GATEWAY, "Places API is unreachable")
            }
            ApiError::HttpStatus(_) | ApiError::ApiStatus(_) | ApiError::Parse(_) => {
                AppError::new(StatusCode::BAD_GATEWAY, "Places API request failed")
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponseJson {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ErrorResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
