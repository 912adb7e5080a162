use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Order ID {0} not found")]
    NotFound(i32),
    #[error("Order ID {0} has dependent slot assignments and cannot be deleted")]
    HasDependentAssignments(i32),
    #[error("Original order ID {0} for extension not found")]
    OriginalNotFound(i32),
    #[error("Plan ID {plan_id} does not belong to product ID {product_id}")]
    PlanProductMismatch { plan_id: i32, product_id: i32 },
    #[error("Plan ID {0} is not available for purchase")]
    PlanUnavailable(i32),
    #[error("Extension orders require a related order ID")]
    MissingRelatedOrder,
    #[error("Order ID {0} cannot extend itself")]
    SelfReference(i32),
    #[error("Status update contains no status to change")]
    EmptyStatusUpdate,
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        tracing::debug!("Order error: {}", self);

        let status = match self {
            Self::NotFound(_) | Self::OriginalNotFound(_) => StatusCode::NOT_FOUND,
            Self::HasDependentAssignments(_)
            | Self::PlanProductMismatch { .. }
            | Self::PlanUnavailable(_)
            | Self::MissingRelatedOrder
            | Self::SelfReference(_)
            | Self::EmptyStatusUpdate => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
