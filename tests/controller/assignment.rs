use axum::extract::State;
use slotshare::{
    model::{
        api::ErrorDto,
        assignment::{AssignSlotDto, AssignmentDto},
    },
    server::controller::{
        assignment::{assign_slot, unassign_slot},
        util::{
            admin::AdminAccess,
            extract::{JsonBody, PathParam},
        },
    },
};

use super::*;

/// Expect 400 when the requested slot already has an active assignment
#[tokio::test]
async fn rejects_occupied_slot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (product, plan) = test.catalog().insert_product_with_plan().await?;
    let account = test.catalog().insert_account(product.id, 4).await?;
    let first = test.order().insert_standard_order(&plan).await?;
    let second = test.order().insert_standard_order(&plan).await?;
    test.assignment()
        .insert_assignment(account.id, 2, first.id, true)
        .await?;

    let result = assign_slot(
        AdminAccess,
        State(test.into_app_state()),
        JsonBody(AssignSlotDto {
            order_id: second.id,
            account_id: account.id,
            slot_number: Some(2),
        }),
    )
    .await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("already assigned"));

    Ok(())
}

/// Expect the lowest free slot when no slot number is requested
#[tokio::test]
async fn assigns_lowest_free_slot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (product, plan) = test.catalog().insert_product_with_plan().await?;
    let account = test.catalog().insert_account(product.id, 4).await?;
    let first = test.order().insert_standard_order(&plan).await?;
    let second = test.order().insert_standard_order(&plan).await?;
    test.assignment()
        .insert_assignment(account.id, 1, first.id, true)
        .await?;

    let result = assign_slot(
        AdminAccess,
        State(test.into_app_state()),
        JsonBody(AssignSlotDto {
            order_id: second.id,
            account_id: account.id,
            slot_number: None,
        }),
    )
    .await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let assignment: AssignmentDto = json_body(resp).await;
    assert_eq!(assignment.slot_number, 2);

    Ok(())
}

#[tokio::test]
async fn unassign_returns_not_found_for_missing_assignment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let result = unassign_slot(AdminAccess, State(test.into_app_state()), PathParam(7)).await;

    assert_eq!(status_of(result), StatusCode::NOT_FOUND);

    Ok(())
}
