//! Typed errors and HTTP mapping.

use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("env {var}: {reason}")]
    Env { var: &'static str, reason: String },
    #[error("config load: {0}")]
    Load(String),
    #[error("validation: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("id sequence exhausted")]
    IdsExhausted,
}

/// Handler-level failures. The display text is what the client sees in the envelope.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("id not provided")]
    MissingId,
    #[error("data not provided")]
    MissingData,
    #[error("data invalid: {0} must be an integer")]
    InvalidData(&'static str),
    #[error("id invalid or not found")]
    NotFound,
    #[error("route not found")]
    RouteNotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure with the message shown to the client.
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingId | AppError::MissingData => StatusCode::BAD_REQUEST,
            AppError::InvalidData(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            AppError::Config(e) => tracing::error!(error = %e, "config error"),
            other => tracing::warn!(status = status.as_u16(), "{}", other),
        }
        (status, Json(Envelope::error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(AppError::MissingId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MissingData.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidData("weight").status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        let err = AppError::store("insert failed")(StoreError::Unavailable("down".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_error_shows_only_the_client_message() {
        let err = AppError::store("delete failed")(StoreError::Unavailable("socket closed".into()));
        assert_eq!(err.to_string(), "delete failed");
    }

    #[test]
    fn invalid_data_names_the_field() {
        assert_eq!(
            AppError::InvalidData("price").to_string(),
            "data invalid: price must be an integer"
        );
    }
}
