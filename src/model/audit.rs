use serde::{Deserialize, Serialize};

use crate::model::{assignment::SlotConflictDto, order::OrderDto};

/// Combined result of every integrity audit
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IntegrityReportDto {
    pub slot_conflicts: Vec<SlotConflictDto>,
    pub unclassified_orders: Vec<OrderDto>,
    pub orphaned_extensions: Vec<OrderDto>,
    pub total_issues: usize,
}
