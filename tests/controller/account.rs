use axum::extract::State;
use slotshare::{
    model::assignment::SlotDto,
    server::controller::{
        account::{delete_account, get_account, get_account_slots},
        util::{admin::AdminAccess, extract::PathParam},
    },
};

use super::*;

/// Expect 400 while an inactive assignment still references the account
#[tokio::test]
async fn delete_blocks_account_with_history() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (product, plan) = test.catalog().insert_product_with_plan().await?;
    let account = test.catalog().insert_account(product.id, 2).await?;
    let order = test.order().insert_standard_order(&plan).await?;
    test.assignment()
        .insert_assignment(account.id, 1, order.id, false)
        .await?;
    let state = test.into_app_state();

    let result = delete_account(AdminAccess, State(state.clone()), PathParam(account.id)).await;
    assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

    let kept = get_account(AdminAccess, State(state), PathParam(account.id)).await;
    assert_eq!(status_of(kept), StatusCode::OK);

    Ok(())
}

/// Expect every slot listed with duplicates visible on the conflicting slot
#[tokio::test]
async fn slots_show_conflicting_assignments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let (product, plan) = test.catalog().insert_product_with_plan().await?;
    let account = test.catalog().insert_account(product.id, 3).await?;
    let first = test.order().insert_standard_order(&plan).await?;
    let second = test.order().insert_standard_order(&plan).await?;
    test.assignment()
        .insert_assignment(account.id, 1, first.id, true)
        .await?;
    test.assignment()
        .insert_assignment(account.id, 1, second.id, true)
        .await?;

    let result =
        get_account_slots(AdminAccess, State(test.into_app_state()), PathParam(account.id)).await;

    let resp = respond(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let slots: Vec<SlotDto> = json_body(resp).await;
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0].assignments.len(), 2);
    assert!(slots[1].assignments.is_empty());

    Ok(())
}
