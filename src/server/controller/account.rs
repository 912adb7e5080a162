use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        account::{AccountDto, AccountFilterParams, CreateAccountDto, UpdateAccountDto},
        api::{ErrorDto, SuccessDto},
        assignment::SlotDto,
    },
    server::{
        controller::util::{
            admin::AdminAccess,
            extract::{JsonBody, PathParam, QueryParams},
        },
        error::Error,
        model::app::AppState,
        service::{account::AccountService, assignment::AssignmentService},
    },
};

pub static ACCOUNT_TAG: &str = "account";

#[utoipa::path(
    get,
    path = "/api/admin/accounts",
    tag = ACCOUNT_TAG,
    params(AccountFilterParams),
    responses(
        (status = 200, description = "Shared accounts", body = Vec<AccountDto>),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_accounts(
    _admin: AdminAccess,
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<AccountFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let accounts = AccountService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(accounts)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/accounts",
    tag = ACCOUNT_TAG,
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Account created", body = AccountDto),
        (status = 400, description = "Invalid account", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_account(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateAccountDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(account)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/accounts/{account_id}",
    tag = ACCOUNT_TAG,
    params(("account_id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Shared account", body = AccountDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(account_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db).get(account_id).await?;

    Ok((StatusCode::OK, Json(account)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/accounts/{account_id}",
    tag = ACCOUNT_TAG,
    params(("account_id" = i32, Path, description = "Account ID")),
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account updated", body = AccountDto),
        (status = 400, description = "Invalid account", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_account(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(account_id): PathParam<i32>,
    JsonBody(dto): JsonBody<UpdateAccountDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .update(account_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(account)).into_response())
}

/// Delete an account that no assignment references
#[utoipa::path(
    delete,
    path = "/api/admin/accounts/{account_id}",
    tag = ACCOUNT_TAG,
    params(("account_id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted", body = SuccessDto),
        (status = 400, description = "Account still has slot assignments", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(account_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    AccountService::new(&state.db).delete(account_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}

/// Slot occupancy of an account
///
/// Lists every slot from 1 to `max_slots`, followed by any occupied slot past
/// the current capacity.
#[utoipa::path(
    get,
    path = "/api/admin/accounts/{account_id}/slots",
    tag = ACCOUNT_TAG,
    params(("account_id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Slots with their active assignments", body = Vec<SlotDto>),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account_slots(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(account_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let slots = AssignmentService::new(&state.db)
        .account_slots(account_id)
        .await?;

    Ok((StatusCode::OK, Json(slots)).into_response())
}
