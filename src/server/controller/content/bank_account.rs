use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        content::{BankAccountDto, CreateBankAccountDto, UpdateBankAccountDto},
    },
    server::{
        controller::{
            content::CONTENT_TAG,
            util::{
                admin::AdminAccess,
                extract::{JsonBody, PathParam},
            },
        },
        error::Error,
        model::app::AppState,
        service::content::bank_account::BankAccountService,
    },
};

/// Bank accounts buyers may transfer payment to
#[utoipa::path(
    get,
    path = "/api/bank-accounts",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Active bank accounts", body = Vec<BankAccountDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bank_accounts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let bank_accounts = BankAccountService::new(&state.db).list(true).await?;

    Ok((StatusCode::OK, Json(bank_accounts)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/bank-accounts",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All bank accounts", body = Vec<BankAccountDto>),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_list_bank_accounts(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let bank_accounts = BankAccountService::new(&state.db).list(false).await?;

    Ok((StatusCode::OK, Json(bank_accounts)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/bank-accounts",
    tag = CONTENT_TAG,
    request_body = CreateBankAccountDto,
    responses(
        (status = 201, description = "Bank account created", body = BankAccountDto),
        (status = 400, description = "Invalid bank account", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bank_account(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateBankAccountDto>,
) -> Result<impl IntoResponse, Error> {
    let bank_account = BankAccountService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(bank_account)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/bank-accounts/{bank_account_id}",
    tag = CONTENT_TAG,
    params(("bank_account_id" = i32, Path, description = "Bank account ID")),
    request_body = UpdateBankAccountDto,
    responses(
        (status = 200, description = "Bank account updated", body = BankAccountDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Bank account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bank_account(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(bank_account_id): PathParam<i32>,
    JsonBody(dto): JsonBody<UpdateBankAccountDto>,
) -> Result<impl IntoResponse, Error> {
    let bank_account = BankAccountService::new(&state.db)
        .update(bank_account_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(bank_account)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/bank-accounts/{bank_account_id}",
    tag = CONTENT_TAG,
    params(("bank_account_id" = i32, Path, description = "Bank account ID")),
    responses(
        (status = 200, description = "Bank account deleted", body = SuccessDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Bank account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bank_account(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(bank_account_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    BankAccountService::new(&state.db)
        .delete(bank_account_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}
