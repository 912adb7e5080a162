use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        assignment::{AssignSlotDto, AssignmentDto, AssignmentFilterParams},
    },
    server::{
        controller::util::{
            admin::AdminAccess,
            extract::{JsonBody, PathParam, QueryParams},
        },
        error::Error,
        model::app::AppState,
        service::assignment::AssignmentService,
    },
};

pub static ASSIGNMENT_TAG: &str = "assignment";

#[utoipa::path(
    get,
    path = "/api/admin/assignments",
    tag = ASSIGNMENT_TAG,
    params(AssignmentFilterParams),
    responses(
        (status = 200, description = "Assignments ordered by account and slot", body = Vec<AssignmentDto>),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_assignments(
    _admin: AdminAccess,
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<AssignmentFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let assignments = AssignmentService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(assignments)).into_response())
}

/// Assign an order to a slot, picking the lowest free slot when none is given
#[utoipa::path(
    post,
    path = "/api/admin/assignments",
    tag = ASSIGNMENT_TAG,
    request_body = AssignSlotDto,
    responses(
        (status = 201, description = "Slot assigned", body = AssignmentDto),
        (status = 400, description = "Slot occupied, out of range or account full", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Order or account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_slot(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<AssignSlotDto>,
) -> Result<impl IntoResponse, Error> {
    let assignment = AssignmentService::new(&state.db).assign(dto).await?;

    Ok((StatusCode::CREATED, Json(assignment)).into_response())
}

/// Deactivate an assignment, freeing its slot
#[utoipa::path(
    delete,
    path = "/api/admin/assignments/{assignment_id}",
    tag = ASSIGNMENT_TAG,
    params(("assignment_id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment deactivated", body = AssignmentDto),
        (status = 400, description = "Assignment already inactive", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_slot(
    _admin: AdminAccess,
    State(state): State<AppState>,
    PathParam(assignment_id): PathParam<i32>,
) -> Result<impl IntoResponse, Error> {
    let assignment = AssignmentService::new(&state.db)
        .unassign(assignment_id)
        .await?;

    Ok((StatusCode::OK, Json(assignment)).into_response())
}
