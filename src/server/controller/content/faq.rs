use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        content::{CreateFaqDto, FaqDto, UpdateFaqDto},
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
        service::content::faq::FaqService,
    },
};

#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "FAQ entries by sort order", body = Vec<FaqDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_faqs(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let faqs = FaqService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(faqs)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/faqs",
    tag = CONTENT_TAG,
    request_body = CreateFaqDto,
    responses(
        (status = 201, description = "FAQ entry created", body = FaqDto),
        (status = 400, description = "Invalid FAQ entry", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_faq(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateFaqDto>,
) -> Result<impl IntoResponse, Error> {
    let faq = FaqService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(faq)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/faqs/{faq_id}",
    tag = CONTENT_TAG,
    params(("faq_id" = i32, Path, description = "FAQ entry ID")),
    request_body = UpdateFaqDto,
    responses(
        (status = 200, description = "FAQ entry updated", body = FaqDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "FAQ entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_faq(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(faq_id): PathParam<i32>,
    JsonBody(dto): JsonBody<UpdateFaqDto>,
) -> Result<impl IntoResponse, Error> {
    let faq = FaqService::new(&state.db).update(faq_id, dto).await?;

    Ok((StatusCode::OK, Json(faq)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/faqs/{faq_id}",
    tag = CONTENT_TAG,
    params(("faq_id" = i32, Path, description = "FAQ entry ID")),
    responses(
        (status = 200, description = "FAQ entry deleted", body = SuccessDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "FAQ entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_faq(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(faq_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    FaqService::new(&state.db).delete(faq_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}
