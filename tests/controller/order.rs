use axum::extract::State;
use slotshare::{
    model::{
        api::ErrorDto,
        order::{ClassifyOrderDto, OrderDto, OrderTypeDto, StatusUpdateDto},
    },
    server::controller::{
        order::{classify_order, delete_order, get_order, update_order_status},
        util::{
            admin::AdminAccess,
            extract::{JsonBody, PathParam},
        },
    },
};

use super::*;

mod delete_order {
    use super::*;

    /// Expect 400 and the row kept while an assignment references the order
    #[tokio::test]
    async fn blocks_order_with_assignment() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let (product, plan) = test.catalog().insert_product_with_plan().await?;
        let account = test.catalog().insert_account(product.id, 4).await?;
        let order = test.order().insert_standard_order(&plan).await?;
        test.assignment()
            .insert_assignment(account.id, 1, order.id, true)
            .await?;
        let state = test.into_app_state();

        let result = delete_order(AdminAccess, State(state.clone()), PathParam(order.id)).await;
        let resp = respond(result);

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = json_body(resp).await;
        assert!(body.error.contains("assignments"));

        let still_there = get_order(AdminAccess, State(state), PathParam(order.id)).await;
        assert_eq!(status_of(still_there), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    async fn deletes_unassigned_order() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let (_, plan) = test.catalog().insert_product_with_plan().await?;
        let order = test.order().insert_standard_order(&plan).await?;
        let state = test.into_app_state();

        let result = delete_order(AdminAccess, State(state.clone()), PathParam(order.id)).await;
        assert_eq!(status_of(result), StatusCode::OK);

        let gone = get_order(AdminAccess, State(state), PathParam(order.id)).await;
        assert_eq!(status_of(gone), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn returns_not_found_for_missing_order() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;

        let result = delete_order(AdminAccess, State(test.into_app_state()), PathParam(42)).await;

        assert_eq!(status_of(result), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update_order_status {
    use super::*;

    /// Expect a legacy `status` field to be stored as the assignment status
    #[tokio::test]
    async fn applies_legacy_status_field() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let (_, plan) = test.catalog().insert_product_with_plan().await?;
        let order = test.order().insert_standard_order(&plan).await?;

        let result = update_order_status(
            AdminAccess,
            State(test.into_app_state()),
            PathParam(order.id),
            JsonBody(StatusUpdateDto {
                status: Some("ASSIGNED".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let order: OrderDto = json_body(resp).await;
        assert_eq!(order.assignment_status, "ASSIGNED");
        assert_eq!(order.payment_status, "PENDING");

        Ok(())
    }

    /// Expect 400 when no status field is present
    #[tokio::test]
    async fn rejects_empty_update() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let (_, plan) = test.catalog().insert_product_with_plan().await?;
        let order = test.order().insert_standard_order(&plan).await?;

        let result = update_order_status(
            AdminAccess,
            State(test.into_app_state()),
            PathParam(order.id),
            JsonBody(StatusUpdateDto::default()),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod classify_order {
    use super::*;

    #[tokio::test]
    async fn links_extension_to_original() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let (_, plan) = test.catalog().insert_product_with_plan().await?;
        let original = test.order().insert_standard_order(&plan).await?;
        let legacy = test.order().insert_order(&plan, None, None).await?;

        let result = classify_order(
            AdminAccess,
            State(test.into_app_state()),
            PathParam(legacy.id),
            JsonBody(ClassifyOrderDto {
                order_type: OrderTypeDto::Extension,
                related_order_id: Some(original.id),
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        let order: OrderDto = json_body(resp).await;
        assert_eq!(order.order_type, Some(OrderTypeDto::Extension));
        assert_eq!(order.related_order_id, Some(original.id));

        Ok(())
    }
}
