use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::StoreError;
use crate::validation::FieldError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        source: StoreError,
    },

    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl AppError {
    pub fn storage(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Storage { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Storage { context, source } => {
                tracing::error!("{}: {}", context, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": format!("{context}: {source}") })),
                )
                    .into_response()
            }
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),
            AppError::MalformedBody(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": message })),
            )
                .into_response(),
        }
    }
}
