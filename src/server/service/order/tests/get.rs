use super::*;

/// Expect assignments and extension ids to be attached to the order
#[tokio::test]
async fn includes_assignments_and_extensions() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (product, plan) = test.catalog().insert_product_with_plan().await?;
    let account = test.catalog().insert_account(product.id, 4).await?;
    let original = test.order().insert_standard_order(&plan).await?;
    let extension = test.order().insert_extension_order(&plan, original.id).await?;
    test.assignment()
        .insert_assignment(account.id, 2, original.id, true)
        .await?;

    let detail = OrderService::new(&test.db).get(original.id).await.unwrap();

    assert_eq!(detail.order.id, original.id);
    assert_eq!(detail.assignments.len(), 1);
    assert_eq!(detail.assignments[0].slot_number, 2);
    assert_eq!(detail.extension_order_ids, vec![extension.id]);

    Ok(())
}

/// Expect NotFound for a missing order
#[tokio::test]
async fn fails_for_nonexistent_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let result = OrderService::new(&test.db).get(1).await;

    assert!(matches!(result, Err(Error::OrderError(OrderError::NotFound(1)))));

    Ok(())
}
