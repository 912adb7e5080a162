use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        auth::{ChangePasswordDto, RequestCodeDto, ResetPasswordDto, VerifyCodeDto},
    },
    server::{
        controller::util::extract::JsonBody, error::Error, model::app::AppState,
        service::auth::PasswordService,
    },
};

pub static AUTH_TAG: &str = "auth";

fn password_service(state: &AppState) -> PasswordService<'_> {
    PasswordService::new(
        &state.db,
        state.mailer.as_ref(),
        state.config.verification_code_ttl_minutes,
    )
}

/// Send a password reset verification code
#[utoipa::path(
    post,
    path = "/api/auth/verification-code",
    tag = AUTH_TAG,
    request_body = RequestCodeDto,
    responses(
        (status = 200, description = "Code issued", body = SuccessDto),
        (status = 404, description = "No profile for email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_verification_code(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<RequestCodeDto>,
) -> Result<impl IntoResponse, Error> {
    password_service(&state).request_code(&dto.email).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}

/// Check a verification code without consuming it
#[utoipa::path(
    post,
    path = "/api/auth/verification-code/verify",
    tag = AUTH_TAG,
    request_body = VerifyCodeDto,
    responses(
        (status = 200, description = "Code is valid", body = SuccessDto),
        (status = 400, description = "Invalid or expired code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_code(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<VerifyCodeDto>,
) -> Result<impl IntoResponse, Error> {
    password_service(&state).verify_code(dto).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}

/// Reset a password using a verification code
#[utoipa::path(
    post,
    path = "/api/auth/password-reset",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = SuccessDto),
        (status = 400, description = "Invalid code or password too short", body = ErrorDto),
        (status = 404, description = "No profile for email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<ResetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    password_service(&state).reset_password(dto).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}

/// Change a password by proving the current one
#[utoipa::path(
    post,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = SuccessDto),
        (status = 400, description = "New password too short", body = ErrorDto),
        (status = 401, description = "Current password is incorrect", body = ErrorDto),
        (status = 404, description = "No profile for email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<ChangePasswordDto>,
) -> Result<impl IntoResponse, Error> {
    password_service(&state).change_password(dto).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}
