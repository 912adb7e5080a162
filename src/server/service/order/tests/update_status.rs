use crate::model::order::StatusUpdateDto;

use super::*;

/// Expect legacy status to update assignment_status
#[tokio::test]
async fn applies_legacy_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (_, plan) = test.catalog().insert_product_with_plan().await?;
    let order = test.order().insert_standard_order(&plan).await?;

    let updated = OrderService::new(&test.db)
        .update_status(
            order.id,
            StatusUpdateDto {
                status: Some("ASSIGNED".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.assignment_status, "ASSIGNED");
    assert_eq!(updated.payment_status, "PENDING");

    Ok(())
}

/// Expect explicit assignment_status to win over status
#[tokio::test]
async fn prefers_assignment_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (_, plan) = test.catalog().insert_product_with_plan().await?;
    let order = test.order().insert_standard_order(&plan).await?;

    let updated = OrderService::new(&test.db)
        .update_status(
            order.id,
            StatusUpdateDto {
                payment_status: Some("PAID".to_string()),
                assignment_status: Some("Y".to_string()),
                status: Some("X".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.assignment_status, "Y");
    assert_eq!(updated.payment_status, "PAID");

    Ok(())
}

/// Expect EmptyStatusUpdate without touching the order
#[tokio::test]
async fn fails_for_empty_update() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (_, plan) = test.catalog().insert_product_with_plan().await?;
    let order = test.order().insert_standard_order(&plan).await?;

    let result = OrderService::new(&test.db)
        .update_status(order.id, StatusUpdateDto::default())
        .await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::EmptyStatusUpdate))
    ));

    Ok(())
}

/// Expect NotFound for a missing order
#[tokio::test]
async fn fails_for_nonexistent_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let result = OrderService::new(&test.db)
        .update_status(
            3,
            StatusUpdateDto {
                payment_status: Some("PAID".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::OrderError(OrderError::NotFound(3)))));

    Ok(())
}
