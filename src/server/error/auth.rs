use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Admin credentials are missing from the request")]
    MissingAdminCredentials,
    #[error("Admin credentials provided are invalid")]
    InvalidAdminCredentials,
    #[error("No profile exists for email {0:?}")]
    ProfileNotFound(String),
    #[error("Verification code is invalid or has expired")]
    InvalidVerificationCode,
    #[error("Current password is incorrect")]
    WrongPassword,
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
    #[error("Failed to hash or verify password: {0}")]
    PasswordHash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingAdminCredentials | Self::InvalidAdminCredentials => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::ProfileNotFound(ref email) => {
                tracing::debug!(email = %email, "{}", self);

                error_response(StatusCode::NOT_FOUND, "No account found for that email")
            }
            Self::WrongPassword => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::InvalidVerificationCode | Self::PasswordTooShort(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
