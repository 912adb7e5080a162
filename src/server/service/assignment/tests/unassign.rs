use sea_orm::EntityTrait;

use super::*;

/// Expect the row kept inactive and the order back to UNASSIGNED
#[tokio::test]
async fn releases_last_slot_of_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (product, plan) = test.catalog().insert_product_with_plan().await?;
    let account = test.catalog().insert_account(product.id, 4).await?;
    let order = test.order().insert_standard_order(&plan).await?;
    let service = AssignmentService::new(&test.db);
    let assignment = service
        .assign(assign_dto(order.id, account.id, None))
        .await
        .unwrap();

    let released = service.unassign(assignment.id).await.unwrap();

    assert!(!released.is_active);
    assert!(entity::prelude::OrderAccount::find_by_id(assignment.id)
        .one(&test.db)
        .await?
        .is_some());
    let order = entity::prelude::Order::find_by_id(order.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(order.assignment_status, UNASSIGNED_STATUS);

    Ok(())
}

/// Expect the order to stay ASSIGNED while it holds another slot
#[tokio::test]
async fn keeps_status_with_remaining_slot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (product, plan) = test.catalog().insert_product_with_plan().await?;
    let account = test.catalog().insert_account(product.id, 4).await?;
    let order = test.order().insert_standard_order(&plan).await?;
    let service = AssignmentService::new(&test.db);
    let first = service
        .assign(assign_dto(order.id, account.id, Some(1)))
        .await
        .unwrap();
    service
        .assign(assign_dto(order.id, account.id, Some(2)))
        .await
        .unwrap();

    service.unassign(first.id).await.unwrap();

    let order = entity::prelude::Order::find_by_id(order.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(order.assignment_status, ASSIGNED_STATUS);

    Ok(())
}

/// Expect AlreadyInactive when releasing twice
#[tokio::test]
async fn fails_for_inactive_assignment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (product, plan) = test.catalog().insert_product_with_plan().await?;
    let account = test.catalog().insert_account(product.id, 4).await?;
    let order = test.order().insert_standard_order(&plan).await?;
    let assignment = test
        .assignment()
        .insert_assignment(account.id, 1, order.id, false)
        .await?;

    let result = AssignmentService::new(&test.db).unassign(assignment.id).await;

    assert!(matches!(
        result,
        Err(Error::AssignmentError(AssignmentError::AlreadyInactive(_)))
    ));

    Ok(())
}

/// Expect NotFound for a missing assignment
#[tokio::test]
async fn fails_for_nonexistent_assignment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let result = AssignmentService::new(&test.db).unassign(8).await;

    assert!(matches!(
        result,
        Err(Error::AssignmentError(AssignmentError::NotFound(8)))
    ));

    Ok(())
}
