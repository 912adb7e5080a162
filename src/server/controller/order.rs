use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        order::{
            ClassifyOrderDto, CreateOrderDto, ExtendOrderDto, OrderDetailDto, OrderDto,
            OrderFilterParams, OrderLookupDto, StatusUpdateDto,
        },
    },
    server::{
        controller::util::{
            admin::AdminAccess,
            extract::{JsonBody, PathParam, QueryParams},
        },
        error::Error,
        model::app::AppState,
        service::order::OrderService,
    },
};

pub static ORDER_TAG: &str = "order";

/// Place a standard order for a plan
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid order or plan unavailable", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateOrderDto>,
) -> Result<impl IntoResponse, Error> {
    let order = OrderService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(order)).into_response())
}

/// Place an extension order linked to an existing order
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/extend",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "ID of the order being extended")),
    request_body = ExtendOrderDto,
    responses(
        (status = 201, description = "Extension order placed", body = OrderDto),
        (status = 400, description = "Invalid order or plan unavailable", body = ErrorDto),
        (status = 404, description = "Original order or plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn extend_order(
    State(state): State<AppState>,
    PathParam(order_id): PathParam<i32>,
    JsonBody(dto): JsonBody<ExtendOrderDto>,
) -> Result<impl IntoResponse, Error> {
    let order = OrderService::new(&state.db).extend(order_id, dto).await?;

    Ok((StatusCode::CREATED, Json(order)).into_response())
}

/// Find a buyer's orders by email and name
#[utoipa::path(
    post,
    path = "/api/orders/lookup",
    tag = ORDER_TAG,
    request_body = OrderLookupDto,
    responses(
        (status = 200, description = "Matching orders, newest first", body = Vec<OrderDto>),
        (status = 400, description = "Missing email or name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_orders(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<OrderLookupDto>,
) -> Result<impl IntoResponse, Error> {
    let orders = OrderService::new(&state.db).lookup(dto).await?;

    Ok((StatusCode::OK, Json(orders)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = ORDER_TAG,
    params(OrderFilterParams),
    responses(
        (status = 200, description = "Orders, newest first", body = Vec<OrderDto>),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    _admin: AdminAccess,
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<OrderFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let orders = OrderService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(orders)).into_response())
}

/// Get an order with its assignments and extensions
#[utoipa::path(
    get,
    path = "/api/admin/orders/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order detail", body = OrderDetailDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(order_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let order = OrderService::new(&state.db).get(order_id).await?;

    Ok((StatusCode::OK, Json(order)).into_response())
}

/// Update payment and assignment status
///
/// A legacy `status` field is applied as `assignment_status` unless the
/// latter is also present.
#[utoipa::path(
    patch,
    path = "/api/admin/orders/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "No status field provided", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(order_id): PathParam<i32>,
    JsonBody(dto): JsonBody<StatusUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let order = OrderService::new(&state.db)
        .update_status(order_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(order)).into_response())
}

/// Delete an order that no assignment references
#[utoipa::path(
    delete,
    path = "/api/admin/orders/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = SuccessDto),
        (status = 400, description = "Order still has slot assignments", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(order_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    OrderService::new(&state.db).delete(order_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}

/// Set the type of a legacy order, linking extensions to their original
#[utoipa::path(
    put,
    path = "/api/admin/orders/{order_id}/classification",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    request_body = ClassifyOrderDto,
    responses(
        (status = 200, description = "Order classified", body = OrderDto),
        (status = 400, description = "Invalid classification", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn classify_order(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(order_id): PathParam<i32>,
    JsonBody(dto): JsonBody<ClassifyOrderDto>,
) -> Result<impl IntoResponse, Error> {
    let order = OrderService::new(&state.db).classify(order_id, dto).await?;

    Ok((StatusCode::OK, Json(order)).into_response())
}
