use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use itemstash_core::storage::{repository_error_to_status_code, RepositoryError};

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            // NotFound is an expected outcome with a fixed caller-facing
            // message; storage failures keep their diagnostic text.
            let detail = match repo_error {
                RepositoryError::NotFound { .. } => "Item not found".to_string(),
                other => other.to_string(),
            };

            if status.is_server_error() {
                tracing::error!(error = %self.0, "Storage error");
            }

            return (status, Json(serde_json::json!({ "detail": detail }))).into_response();
        }

        tracing::error!(error = %self.0, "Application error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
