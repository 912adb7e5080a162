use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        catalog::{
            CreatePlanDto, CreateProductDto, PlanDto, ProductDetailDto, ProductDto, UpdatePlanDto,
            UpdateProductDto,
        },
    },
    server::{
        controller::util::{
            admin::AdminAccess,
            extract::{JsonBody, PathParam},
        },
        error::Error,
        model::app::AppState,
        service::catalog::{CatalogService, Visibility},
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// List active products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Active products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let products = CatalogService::new(&state.db)
        .list_products(Visibility::Public)
        .await?;

    Ok((StatusCode::OK, Json(products)).into_response())
}

/// Get an active product with its active plans
#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    tag = CATALOG_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product with plans", body = ProductDetailDto),
        (status = 404, description = "Product not found or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    PathParam(product_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let product = CatalogService::new(&state.db)
        .get_product(product_id, Visibility::Public)
        .await?;

    Ok((StatusCode::OK, Json(product)).into_response())
}

/// List the active plans of an active product
#[utoipa::path(
    get,
    path = "/api/products/{product_id}/plans",
    tag = CATALOG_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Plans ordered by duration", body = Vec<PlanDto>),
        (status = 404, description = "Product not found or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_plans(
    State(state): State<AppState>,
    PathParam(product_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let plans = CatalogService::new(&state.db)
        .list_plans(product_id, Visibility::Public)
        .await?;

    Ok((StatusCode::OK, Json(plans)).into_response())
}

/// List every product including inactive ones
#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_list_products(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let products = CatalogService::new(&state.db)
        .list_products(Visibility::Admin)
        .await?;

    Ok((StatusCode::OK, Json(products)).into_response())
}

/// Get any product with all of its plans
#[utoipa::path(
    get,
    path = "/api/admin/products/{product_id}",
    tag = CATALOG_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product with plans", body = ProductDetailDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_product(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(product_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let product = CatalogService::new(&state.db)
        .get_product(product_id, Visibility::Admin)
        .await?;

    Ok((StatusCode::OK, Json(product)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = CATALOG_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateProductDto>,
) -> Result<impl IntoResponse, Error> {
    let product = CatalogService::new(&state.db).create_product(dto).await?;

    Ok((StatusCode::CREATED, Json(product)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{product_id}",
    tag = CATALOG_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(product_id): PathParam<i32>,
    JsonBody(dto): JsonBody<UpdateProductDto>,
) -> Result<impl IntoResponse, Error> {
    let product = CatalogService::new(&state.db)
        .update_product(product_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(product)).into_response())
}

/// Delete a product and its plans
#[utoipa::path(
    delete,
    path = "/api/admin/products/{product_id}",
    tag = CATALOG_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = SuccessDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Product still referenced or store failure", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(product_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .delete_product(product_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/plans",
    tag = CATALOG_TAG,
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Plan created", body = PlanDto),
        (status = 400, description = "Invalid plan", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreatePlanDto>,
) -> Result<impl IntoResponse, Error> {
    let plan = CatalogService::new(&state.db).create_plan(dto).await?;

    Ok((StatusCode::CREATED, Json(plan)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/plans/{plan_id}",
    tag = CATALOG_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Plan updated", body = PlanDto),
        (status = 400, description = "Invalid plan", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(plan_id): PathParam<i32>,
    JsonBody(dto): JsonBody<UpdatePlanDto>,
) -> Result<impl IntoResponse, Error> {
    let plan = CatalogService::new(&state.db).update_plan(plan_id, dto).await?;

    Ok((StatusCode::OK, Json(plan)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/plans/{plan_id}",
    tag = CATALOG_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Plan deleted", body = SuccessDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Plan still referenced or store failure", body = ErrorDto)
    ),
)]
pub async fn delete_plan(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(plan_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db).delete_plan(plan_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}
