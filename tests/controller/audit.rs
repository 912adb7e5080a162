use axum::extract::State;
use entity::sea_orm_active_enums::OrderType;
use slotshare::{
    model::{assignment::SlotConflictDto, audit::IntegrityReportDto, order::OrderDto},
    server::controller::{
        audit::{integrity_report, orphaned_extensions, slot_conflicts, unclassified_orders},
        util::admin::AdminAccess,
    },
};

use super::*;

/// Expect only the doubly assigned slot to be reported
#[tokio::test]
async fn reports_duplicate_slot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (product, plan) = test.catalog().insert_product_with_plan().await?;
    let account = test.catalog().insert_account(product.id, 4).await?;
    let o1 = test.order().insert_standard_order(&plan).await?;
    let o2 = test.order().insert_standard_order(&plan).await?;
    let o3 = test.order().insert_standard_order(&plan).await?;
    for (slot, order_id) in [(1, o1.id), (1, o2.id), (2, o3.id)] {
        test.assignment()
            .insert_assignment(account.id, slot, order_id, true)
            .await?;
    }

    let result = slot_conflicts(AdminAccess, State(test.into_app_state())).await;

    let conflicts: Vec<SlotConflictDto> = json_body(respond(result)).await;
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].slot_number, 1);
    let orders: Vec<i32> = conflicts[0].assignments.iter().map(|a| a.order_id).collect();
    assert_eq!(orders, vec![o1.id, o2.id]);

    Ok(())
}

/// Expect the unclassified and orphaned audits to split legacy rows
#[tokio::test]
async fn separates_unclassified_from_orphaned() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (_, plan) = test.catalog().insert_product_with_plan().await?;
    let o1 = test.order().insert_order(&plan, None, None).await?;
    let o2 = test
        .order()
        .insert_order(&plan, Some(OrderType::Extension), None)
        .await?;
    test.order().insert_extension_order(&plan, o1.id).await?;
    let state = test.into_app_state();

    let unclassified: Vec<OrderDto> =
        json_body(respond(unclassified_orders(AdminAccess, State(state.clone())).await)).await;
    let orphaned: Vec<OrderDto> =
        json_body(respond(orphaned_extensions(AdminAccess, State(state.clone())).await)).await;
    let report: IntegrityReportDto =
        json_body(respond(integrity_report(AdminAccess, State(state)).await)).await;

    assert_eq!(unclassified.iter().map(|o| o.id).collect::<Vec<_>>(), vec![o1.id]);
    assert_eq!(orphaned.iter().map(|o| o.id).collect::<Vec<_>>(), vec![o2.id]);
    assert_eq!(report.total_issues, 2);

    Ok(())
}
