use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        content::{AnswerQnaDto, CreateQnaDto, QnaDto},
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
        service::content::qna::QnaService,
    },
};

#[utoipa::path(
    get,
    path = "/api/qna",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Questions, newest first", body = Vec<QnaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_questions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let questions = QnaService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(questions)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/qna",
    tag = CONTENT_TAG,
    request_body = CreateQnaDto,
    responses(
        (status = 201, description = "Question posted", body = QnaDto),
        (status = 400, description = "Invalid question", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ask_question(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateQnaDto>,
) -> Result<impl IntoResponse, Error> {
    let question = QnaService::new(&state.db).ask(dto).await?;

    Ok((StatusCode::CREATED, Json(question)).into_response())
}

/// Answer a question, replacing any earlier answer
#[utoipa::path(
    put,
    path = "/api/admin/qna/{qna_id}/answer",
    tag = CONTENT_TAG,
    params(("qna_id" = i32, Path, description = "Question ID")),
    request_body = AnswerQnaDto,
    responses(
        (status = 200, description = "Question answered", body = QnaDto),
        (status = 400, description = "Blank answer", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn answer_question(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(qna_id): PathParam<i32>,
    JsonBody(dto): JsonBody<AnswerQnaDto>,
) -> Result<impl IntoResponse, Error> {
    let question = QnaService::new(&state.db).answer(qna_id, dto).await?;

    Ok((StatusCode::OK, Json(question)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/qna/{qna_id}",
    tag = CONTENT_TAG,
    params(("qna_id" = i32, Path, description = "Question ID")),
    responses(
        (status = 200, description = "Question deleted", body = SuccessDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_question(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(qna_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    QnaService::new(&state.db).delete(qna_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })).into_response())
}
