use axum::extract::State;
use slotshare::{
    model::catalog::ProductDetailDto,
    server::controller::{
        catalog::{admin_get_product, get_product},
        util::{admin::AdminAccess, extract::PathParam},
    },
};

use super::*;

/// Expect an inactive product hidden from the storefront but not the back-office
#[tokio::test]
async fn inactive_product_is_admin_only() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let product = test.catalog().insert_product("Retired", false).await?;
    test.catalog().insert_plan(product.id, 30, true).await?;
    let state = test.into_app_state();

    let public = get_product(State(state.clone()), PathParam(product.id)).await;
    assert_eq!(status_of(public), StatusCode::NOT_FOUND);

    let resp = respond(admin_get_product(AdminAccess, State(state), PathParam(product.id)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: ProductDetailDto = json_body(resp).await;
    assert_eq!(detail.plans.len(), 1);

    Ok(())
}
