use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::taxonomy::ErrorResponse;

use crate::domain::a002_category::CategoryError;

/// Ошибка API: HTTP статус + JSON тело `{ error, message }`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn internal(e: anyhow::Error) -> Self {
        tracing::error!("Internal error: {:#}", e);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse {
                error: "Internal".into(),
                message: e.to_string(),
            },
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(e: CategoryError) -> Self {
        let status = match e {
            CategoryError::EmptyCategoryName | CategoryError::UnknownFieldKey(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CategoryError::DuplicateCategoryName(_) => StatusCode::CONFLICT,
            CategoryError::BuiltinCategoryImmutable(_) => StatusCode::FORBIDDEN,
            CategoryError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            CategoryError::PersistenceWriteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            body: ErrorResponse {
                error: e.kind().into(),
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
