use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("Assignment ID {0} not found")]
    NotFound(i32),
    #[error("Account ID {0} not found")]
    AccountNotFound(i32),
    #[error("Account ID {0} is inactive and cannot receive assignments")]
    AccountInactive(i32),
    #[error("Slot {slot_number} is out of range for account ID {account_id} with {max_slots} slots")]
    SlotOutOfRange {
        account_id: i32,
        slot_number: i32,
        max_slots: i32,
    },
    #[error("Slot {slot_number} of account ID {account_id} is already assigned")]
    SlotOccupied { account_id: i32, slot_number: i32 },
    #[error("Account ID {0} has no free slots")]
    NoFreeSlot(i32),
    #[error("Assignment ID {0} is already inactive")]
    AlreadyInactive(i32),
    #[error("Account ID {0} has slot assignments and cannot be deleted")]
    AccountHasAssignments(i32),
}

impl IntoResponse for AssignmentError {
    fn into_response(self) -> Response {
        tracing::debug!("Assignment error: {}", self);

        let status = match self {
            Self::NotFound(_) | Self::AccountNotFound(_) => StatusCode::NOT_FOUND,
            Self::AccountInactive(_)
            | Self::SlotOutOfRange { .. }
            | Self::SlotOccupied { .. }
            | Self::NoFreeSlot(_)
            | Self::AlreadyInactive(_)
            | Self::AccountHasAssignments(_) => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
