use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, Error as ServerError};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Malformed request parameters: {0}")]
    MalformedParameters(String),
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl RequestError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::RequestError(RequestError::MalformedBody(rejection.body_text()))
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        ServerError::RequestError(RequestError::MalformedParameters(rejection.body_text()))
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::RequestError(RequestError::MalformedParameters(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, extract::FromRequest, http::Request, Json};

    use super::*;

    /// Expect a body without a JSON content type to become a 400 error response
    #[tokio::test]
    async fn json_rejection_becomes_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from("{}"))
            .unwrap();
        let rejection = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();

        let error = ServerError::from(rejection);

        assert!(matches!(
            error,
            ServerError::RequestError(RequestError::MalformedBody(_))
        ));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_field_names_the_field() {
        let error = RequestError::invalid("max_slots", "must be at least 1");

        assert_eq!(
            error.to_string(),
            "Invalid value for max_slots: must be at least 1"
        );
    }
}
