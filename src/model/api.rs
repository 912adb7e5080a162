use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Response body for operations that only need to acknowledge success
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

/// Liveness report including database reachability
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub database: bool,
}
