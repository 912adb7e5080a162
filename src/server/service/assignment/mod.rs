//! Slot assignment of orders to shared accounts.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::assignment::{AssignSlotDto, AssignmentDto, AssignmentFilterParams, SlotDto},
    server::{
        audit::slot::{next_free_slot, slot_in_range},
        data::{
            account::AccountRepository,
            order::{
                order_account::AssignmentRepository, OrderRepository, ASSIGNED_STATUS,
                UNASSIGNED_STATUS,
            },
        },
        error::{assignment::AssignmentError, order::OrderError, Error},
        service::account::MAX_SLOTS_PER_ACCOUNT,
    },
};

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    /// Creates a new instance of [`AssignmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns an order to a slot of an account.
    ///
    /// Picks the lowest free slot when `slot_number` is omitted. Validation,
    /// insert and the order's `ASSIGNED` status update share one transaction.
    /// Slot uniqueness is checked here rather than by a database constraint, so
    /// two concurrent assigns of the same slot can still both succeed; the slot
    /// conflict audit reports such duplicates.
    ///
    /// # Returns
    /// - `Ok(AssignmentDto)` - Assignment created
    /// - `Err(Error::OrderError(NotFound))` - Order does not exist
    /// - `Err(Error::AssignmentError)` - Account missing or inactive, slot out of range, occupied or none free
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn assign(&self, dto: AssignSlotDto) -> Result<AssignmentDto, Error> {
        let txn = self.db.begin().await?;

        let order_repo = OrderRepository::new(&txn);
        let assignment_repo = AssignmentRepository::new(&txn);

        let order = order_repo
            .get(dto.order_id)
            .await?
            .ok_or(OrderError::NotFound(dto.order_id))?;

        let account = AccountRepository::new(&txn)
            .get(dto.account_id)
            .await?
            .ok_or(AssignmentError::AccountNotFound(dto.account_id))?;
        if !account.is_active {
            return Err(AssignmentError::AccountInactive(account.id).into());
        }

        let occupied: Vec<i32> = assignment_repo
            .list_active_by_account(account.id)
            .await?
            .into_iter()
            .map(|a| a.slot_number)
            .collect();

        let slot_number = match dto.slot_number {
            Some(slot_number) => {
                if !slot_in_range(slot_number, account.max_slots) {
                    return Err(AssignmentError::SlotOutOfRange {
                        account_id: account.id,
                        slot_number,
                        max_slots: account.max_slots,
                    }
                    .into());
                }
                if occupied.contains(&slot_number) {
                    return Err(AssignmentError::SlotOccupied {
                        account_id: account.id,
                        slot_number,
                    }
                    .into());
                }

                slot_number
            }
            None => next_free_slot(occupied, account.max_slots)
                .ok_or(AssignmentError::NoFreeSlot(account.id))?,
        };

        let assignment = assignment_repo
            .create(account.id, slot_number, order.id)
            .await?;
        order_repo
            .update_status(order.id, None, Some(ASSIGNED_STATUS.to_string()))
            .await?;

        txn.commit().await?;

        tracing::info!(
            assignment_id = assignment.id,
            order_id = order.id,
            account_id = account.id,
            slot_number = slot_number,
            "Assigned order to slot"
        );

        Ok(assignment.into())
    }

    /// Releases a slot by marking the assignment inactive.
    ///
    /// The order returns to `UNASSIGNED` once it holds no other active slot.
    ///
    /// # Returns
    /// - `Ok(AssignmentDto)` - Assignment now inactive
    /// - `Err(Error::AssignmentError)` - Assignment missing or already inactive
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn unassign(&self, assignment_id: i32) -> Result<AssignmentDto, Error> {
        let txn = self.db.begin().await?;

        let assignment_repo = AssignmentRepository::new(&txn);

        let assignment = assignment_repo
            .get(assignment_id)
            .await?
            .ok_or(AssignmentError::NotFound(assignment_id))?;
        if !assignment.is_active {
            return Err(AssignmentError::AlreadyInactive(assignment_id).into());
        }

        let assignment = assignment_repo.deactivate(assignment).await?;

        if assignment_repo
            .count_active_by_order(assignment.order_id)
            .await?
            == 0
        {
            OrderRepository::new(&txn)
                .update_status(
                    assignment.order_id,
                    None,
                    Some(UNASSIGNED_STATUS.to_string()),
                )
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            assignment_id = assignment.id,
            order_id = assignment.order_id,
            "Released slot assignment"
        );

        Ok(assignment.into())
    }

    pub async fn list(&self, filter: AssignmentFilterParams) -> Result<Vec<AssignmentDto>, Error> {
        let assignments = AssignmentRepository::new(self.db).list(filter).await?;

        Ok(assignments.into_iter().map(AssignmentDto::from).collect())
    }

    /// Occupancy of every slot `1..=max_slots` of an account.
    ///
    /// Active assignments outside the account's current capacity, left behind
    /// when `max_slots` was lowered, are appended after the regular slots.
    pub async fn account_slots(&self, account_id: i32) -> Result<Vec<SlotDto>, Error> {
        let account = AccountRepository::new(self.db)
            .get(account_id)
            .await?
            .ok_or(AssignmentError::AccountNotFound(account_id))?;

        let mut by_slot: BTreeMap<i32, Vec<AssignmentDto>> =
            (1..=account.max_slots.min(MAX_SLOTS_PER_ACCOUNT))
                .map(|slot| (slot, Vec::new()))
                .collect();

        for assignment in AssignmentRepository::new(self.db)
            .list_active_by_account(account_id)
            .await?
        {
            by_slot
                .entry(assignment.slot_number)
                .or_default()
                .push(assignment.into());
        }

        Ok(by_slot
            .into_iter()
            .map(|(slot_number, assignments)| SlotDto {
                slot_number,
                assignments,
            })
            .collect())
    }
}
