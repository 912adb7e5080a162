use crate::model::order::{ExtendOrderDto, OrderTypeDto};

use super::*;

fn extension(plan_id: i32) -> ExtendOrderDto {
    ExtendOrderDto {
        plan_id,
        buyer_name: "Kim Buyer".to_string(),
        buyer_email: "kim@example.com".to_string(),
        buyer_phone: None,
        depositor_name: "Kim Buyer".to_string(),
    }
}

/// Expect an extension linked to the original order
#[tokio::test]
async fn creates_linked_extension() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (_, plan) = test.catalog().insert_product_with_plan().await?;
    let original = test.order().insert_standard_order(&plan).await?;

    let order = OrderService::new(&test.db)
        .extend(original.id, extension(plan.id))
        .await
        .unwrap();

    assert_eq!(order.order_type, Some(OrderTypeDto::Extension));
    assert_eq!(order.related_order_id, Some(original.id));
    assert_eq!(order.product_id, original.product_id);

    Ok(())
}

/// Expect OriginalNotFound when the original order does not exist
#[tokio::test]
async fn fails_for_nonexistent_original() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (_, plan) = test.catalog().insert_product_with_plan().await?;

    let result = OrderService::new(&test.db)
        .extend(404, extension(plan.id))
        .await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::OriginalNotFound(404)))
    ));

    Ok(())
}

/// Expect PlanProductMismatch for a plan of a different product than the original
#[tokio::test]
async fn fails_for_plan_of_other_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (_, plan) = test.catalog().insert_product_with_plan().await?;
    let original = test.order().insert_standard_order(&plan).await?;
    let other = test.catalog().insert_product("Music", true).await?;
    let other_plan = test.catalog().insert_plan(other.id, 30, true).await?;

    let result = OrderService::new(&test.db)
        .extend(original.id, extension(other_plan.id))
        .await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::PlanProductMismatch { .. }))
    ));

    Ok(())
}
