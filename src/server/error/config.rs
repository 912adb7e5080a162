use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required setting absent from both the environment and `.env`
    #[error("slotshare requires {0} to be set in the environment or .env")]
    MissingEnvVar(String),
    #[error("slotshare could not parse {var} from the environment: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn missing_variable_points_at_dotenv() {
        let error = ConfigError::MissingEnvVar("ADMIN_API_KEY".to_string());

        assert_eq!(
            error.to_string(),
            "slotshare requires ADMIN_API_KEY to be set in the environment or .env"
        );
    }

    /// Expect configuration failures to surface as a generic 500
    #[test]
    fn responds_with_internal_error() {
        let response = ConfigError::InvalidEnvValue {
            var: "BIND_ADDRESS".to_string(),
            reason: "invalid socket address syntax".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
