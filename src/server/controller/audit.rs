//! Read-only integrity audits replacing ad-hoc diagnostic scripts.
//!
//! None of these endpoints modify data; they report rows an operator needs to
//! correct by hand.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto, assignment::SlotConflictDto, audit::IntegrityReportDto, order::OrderDto,
    },
    server::{
        controller::util::admin::AdminAccess, error::Error, model::app::AppState,
        service::audit::AuditService,
    },
};

pub static AUDIT_TAG: &str = "audit";

/// Slots held by more than one active assignment
#[utoipa::path(
    get,
    path = "/api/admin/audit/slot-conflicts",
    tag = AUDIT_TAG,
    responses(
        (status = 200, description = "Conflicting slots, empty when consistent", body = Vec<SlotConflictDto>),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn slot_conflicts(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let conflicts = AuditService::new(&state.db).slot_conflicts().await?;

    Ok((StatusCode::OK, Json(conflicts)).into_response())
}

/// Orders with no order type
#[utoipa::path(
    get,
    path = "/api/admin/audit/unclassified-orders",
    tag = AUDIT_TAG,
    responses(
        (status = 200, description = "Unclassified orders", body = Vec<OrderDto>),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unclassified_orders(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let orders = AuditService::new(&state.db).unclassified_orders().await?;

    Ok((StatusCode::OK, Json(orders)).into_response())
}

/// Extension orders missing the link to their original order
#[utoipa::path(
    get,
    path = "/api/admin/audit/orphaned-extensions",
    tag = AUDIT_TAG,
    responses(
        (status = 200, description = "Orphaned extension orders", body = Vec<OrderDto>),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orphaned_extensions(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let orders = AuditService::new(&state.db).orphaned_extensions().await?;

    Ok((StatusCode::OK, Json(orders)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/audit/report",
    tag = AUDIT_TAG,
    responses(
        (status = 200, description = "Every audit combined", body = IntegrityReportDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn integrity_report(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let report = AuditService::new(&state.db).report().await?;

    Ok((StatusCode::OK, Json(report)).into_response())
}
