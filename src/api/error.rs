use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json
};
use tracing::error;

use crate::{api::api_structs::ErrorResponse, model::Error, store::StoreError};

/// Error surfaced to API callers as a `{"success": false, "error": ...}`
/// envelope with the matching status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> ApiError {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into()
        }
    }

    pub fn not_found(message: impl Into<String>) -> ApiError {
        ApiError {
            status: StatusCode::NOT_FOUND,
            message: message.into()
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> ApiError {
        ApiError::bad_request(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> ApiError {
        error!("failed to persist leaderboard: {err}");
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "failed to persist leaderboard".to_string()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            success: false,
            error: self.message
        });
        (self.status, body).into_response()
    }
}
