//! Read-only integrity audits over orders and slot assignments.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        assignment::{AssignmentDto, SlotConflictDto},
        audit::IntegrityReportDto,
        order::OrderDto,
    },
    server::{
        audit::{
            order::{is_orphaned_extension, is_unclassified},
            slot::{find_slot_conflicts, SlotConflict},
        },
        data::order::{order_account::AssignmentRepository, OrderRepository},
        error::Error,
    },
};

impl From<SlotConflict> for SlotConflictDto {
    fn from(conflict: SlotConflict) -> Self {
        Self {
            account_id: conflict.account_id,
            slot_number: conflict.slot_number,
            assignments: conflict
                .assignments
                .into_iter()
                .map(AssignmentDto::from)
                .collect(),
        }
    }
}

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    /// Creates a new instance of [`AuditService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Slots held by more than one active assignment, ordered by account and slot
    pub async fn slot_conflicts(&self) -> Result<Vec<SlotConflictDto>, Error> {
        let active = AssignmentRepository::new(self.db).list_active().await?;

        let conflicts: Vec<SlotConflictDto> = find_slot_conflicts(active)
            .into_iter()
            .map(SlotConflictDto::from)
            .collect();

        if !conflicts.is_empty() {
            tracing::warn!(count = conflicts.len(), "Found slots with duplicate assignments");
        }

        Ok(conflicts)
    }

    /// Orders without an `order_type`
    pub async fn unclassified_orders(&self) -> Result<Vec<OrderDto>, Error> {
        let orders = OrderRepository::new(self.db).find_unclassified().await?;

        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    /// Extension orders without `related_order_id`
    pub async fn orphaned_extensions(&self) -> Result<Vec<OrderDto>, Error> {
        let orders = OrderRepository::new(self.db)
            .find_extensions_missing_link()
            .await?;

        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    /// Runs every audit and totals the findings
    ///
    /// Both order audits are answered from a single query whose rows are
    /// then split by the audit predicates.
    pub async fn report(&self) -> Result<IntegrityReportDto, Error> {
        let slot_conflicts = self.slot_conflicts().await?;

        let suspects = OrderRepository::new(self.db)
            .find_classification_suspects()
            .await?;

        let unclassified_orders: Vec<OrderDto> = suspects
            .iter()
            .filter(|order| is_unclassified(order))
            .cloned()
            .map(OrderDto::from)
            .collect();
        let orphaned_extensions: Vec<OrderDto> = suspects
            .into_iter()
            .filter(is_orphaned_extension)
            .map(OrderDto::from)
            .collect();

        let total_issues =
            slot_conflicts.len() + unclassified_orders.len() + orphaned_extensions.len();

        tracing::info!(
            slot_conflicts = slot_conflicts.len(),
            unclassified_orders = unclassified_orders.len(),
            orphaned_extensions = orphaned_extensions.len(),
            "Completed integrity audit"
        );

        Ok(IntegrityReportDto {
            slot_conflicts,
            unclassified_orders,
            orphaned_extensions,
            total_issues,
        })
    }
}
