//! Error types for the slotshare server.
//!
//! Each domain has its own `thiserror` enum implementing `IntoResponse`, and the
//! top-level [`Error`] aggregates them so handlers can use `?` throughout. Every
//! error response carries an [`ErrorDto`] JSON body.

pub mod assignment;
pub mod auth;
pub mod config;
pub mod order;
pub mod request;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        assignment::AssignmentError, auth::AuthError, config::ConfigError, order::OrderError,
        request::RequestError, resource::ResourceError,
    },
};

/// Main error type for the slotshare server.
///
/// Domain errors map to 4xx responses through their own `IntoResponse`
/// implementations. Store errors become a 500 whose body carries the store's
/// message, internal errors a 500 with a generic message.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Admin capability or password-reset failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Order ledger rule violated.
    #[error(transparent)]
    OrderError(#[from] OrderError),
    /// Slot assignment rule violated.
    #[error(transparent)]
    AssignmentError(#[from] AssignmentError),
    /// Requested record does not exist.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Malformed or invalid request input.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Internal error indicating a bug in slotshare's code.
    #[error("Internal error with slotshare's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::OrderError(err) => err.into_response(),
            Self::AssignmentError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::DbErr(err) => DatabaseError(err).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status & message
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so internal details are not
/// exposed to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Wrapper converting a store error into a 500 response.
///
/// Unlike [`InternalServerError`] the store's message is passed through to the
/// client, which admin tooling relies on to diagnose failed writes.
pub struct DatabaseError(pub sea_orm::DbErr);

impl IntoResponse for DatabaseError {
    fn into_response(self) -> Response {
        tracing::error!("Database error: {}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", self.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;

    async fn body_of(response: Response) -> ErrorDto {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Expect store errors to surface as 500 with the store message in the body
    #[tokio::test]
    async fn passes_store_message_through() {
        let err = Error::DbErr(sea_orm::DbErr::Custom("relation missing".to_string()));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert!(body.error.contains("relation missing"));
    }

    /// Expect internal errors to hide their message
    #[tokio::test]
    async fn hides_internal_error_details() {
        let err = Error::InternalError("secret detail".to_string());

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body.error, "Internal server error");
    }
}
