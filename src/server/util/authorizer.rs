use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::error::auth::AuthError;

/// Decides whether a request may use the admin API.
///
/// Injected into [`AppState`](crate::server::model::app::AppState) and
/// consulted by the [`AdminAccess`](crate::server::controller::util::admin::AdminAccess)
/// extractor on every admin handler.
pub trait Authorizer: Send + Sync {
    /// Returns `Ok(())` when the request headers grant admin access
    fn authorize(&self, headers: &HeaderMap) -> Result<(), AuthError>;
}

/// Grants admin access to requests bearing a fixed API key.
///
/// Expects `Authorization: Bearer <key>`.
pub struct ApiKeyAuthorizer {
    api_key: String,
}

impl ApiKeyAuthorizer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl Authorizer for ApiKeyAuthorizer {
    fn authorize(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingAdminCredentials);
        };

        let token = value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(AuthError::InvalidAdminCredentials)?;

        if constant_time_eq(token.as_bytes(), self.api_key.as_bytes()) {
            Ok(())
        } else {
            Err(AuthError::InvalidAdminCredentials)
        }
    }
}

/// Compares two byte strings without short-circuiting on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
