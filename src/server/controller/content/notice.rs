use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        content::{CreateNoticeDto, NoticeDto, UpdateNoticeDto},
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
        service::content::notice::NoticeService,
    },
};

/// List notices, pinned first
#[utoipa::path(
    get,
    path = "/api/notices",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Notices", body = Vec<NoticeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notices(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let notices = NoticeService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(notices)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/notices/{notice_id}",
    tag = CONTENT_TAG,
    params(("notice_id" = i32, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Notice", body = NoticeDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notice(
    State(state): State<AppState>,
    PathParam(notice_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let notice = NoticeService::new(&state.db).get(notice_id).await?;

    Ok((StatusCode::OK, Json(notice)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/notices",
    tag = CONTENT_TAG,
    request_body = CreateNoticeDto,
    responses(
        (status = 201, description = "Notice created", body = NoticeDto),
        (status = 400, description = "Invalid notice", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notice(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateNoticeDto>,
) -> Result<impl IntoResponse, Error> {
    let notice = NoticeService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(notice)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/notices/{notice_id}",
    tag = CONTENT_TAG,
    params(("notice_id" = i32, Path, description = "Notice ID")),
    request_body = UpdateNoticeDto,
    responses(
        (status = 200, description = "Notice updated", body = NoticeDto),
        (status = 400, description = "Invalid notice", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_notice(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(notice_id): PathParam<i32>,
    JsonBody(dto): JsonBody<UpdateNoticeDto>,
) -> Result<impl IntoResponse, Error> {
    let notice = NoticeService::new(&state.db).update(notice_id, dto).await?;

    Ok((StatusCode::OK, Json(notice)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/notices/{notice_id}",
    tag = CONTENT_TAG,
    params(("notice_id" = i32, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Notice deleted", body = SuccessDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notice(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(notice_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    NoticeService::new(&state.db).delete(notice_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}
