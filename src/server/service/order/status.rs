use crate::{model::order::StatusUpdateDto, server::error::order::OrderError};

/// Status values to write for an order after resolving a partial update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub payment_status: Option<String>,
    pub assignment_status: Option<String>,
}

impl StatusChange {
    /// Resolves a status update request into the fields to write.
    ///
    /// The legacy `status` field stands in for `assignment_status` only when
    /// the latter is absent. Values are not checked against any state machine;
    /// any status may follow any other.
    ///
    /// # Returns
    /// - `Ok(StatusChange)` - At least one status will change
    /// - `Err(OrderError::EmptyStatusUpdate)` - Request carried no status at all
    pub fn resolve(update: StatusUpdateDto) -> Result<Self, OrderError> {
        let assignment_status = update.assignment_status.or(update.status);

        if update.payment_status.is_none() && assignment_status.is_none() {
            return Err(OrderError::EmptyStatusUpdate);
        }

        Ok(Self {
            payment_status: update.payment_status,
            assignment_status,
        })
    }
}
