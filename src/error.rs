use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, ApiResponse<serde_json::Value>) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ApiResponse::failure(msg.clone()))
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiResponse::failure(msg.clone()))
            }
            AppError::DbError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure_with_error("Internal server error", err.to_string()),
            ),
            AppError::OrmError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure_with_error("Internal server error", err.to_string()),
            ),
            AppError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure_with_error("Internal server error", err.to_string()),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bad_request_maps_to_envelope() {
        let response = AppError::BadRequest("Missing required fields".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Missing required fields");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = AppError::NotFound("Reservation not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
