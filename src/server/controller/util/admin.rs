use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{error::Error, model::app::AppState};

/// Proof that the request carries the admin capability.
///
/// Taking this extractor as a handler argument is what makes a route
/// admin-only; it must come before any body extractor.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state.authorizer.authorize(&parts.headers)?;

        Ok(AdminAccess)
    }
}
