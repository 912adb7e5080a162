//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its OpenAPI annotation, and
//! Swagger UI serves the collected document at `/api/docs`.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Public storefront routes live under `/api`, back-office routes under
/// `/api/admin` where each handler requires the admin capability. Requests
/// are traced through [`TraceLayer`].
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let state = AppState::new(db, config);
/// let app = routes().with_state(state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Slotshare", description = "Slotshare storefront and back-office API"), tags(
        (name = controller::catalog::CATALOG_TAG, description = "Products and plans"),
        (name = controller::order::ORDER_TAG, description = "Checkout and order administration"),
        (name = controller::assignment::ASSIGNMENT_TAG, description = "Account slot assignment"),
        (name = controller::account::ACCOUNT_TAG, description = "Shared accounts"),
        (name = controller::content::CONTENT_TAG, description = "Notices, FAQ, Q&A and bank accounts"),
        (name = controller::audit::AUDIT_TAG, description = "Read-only data integrity audits"),
        (name = controller::auth::AUTH_TAG, description = "Password reset and change"),
        (name = controller::health::HEALTH_TAG, description = "Liveness"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Storefront
        .routes(routes!(controller::catalog::list_products))
        .routes(routes!(controller::catalog::get_product))
        .routes(routes!(controller::catalog::list_plans))
        .routes(routes!(controller::order::create_order))
        .routes(routes!(controller::order::extend_order))
        .routes(routes!(controller::order::lookup_orders))
        .routes(routes!(controller::content::notice::list_notices))
        .routes(routes!(controller::content::notice::get_notice))
        .routes(routes!(controller::content::faq::list_faqs))
        .routes(routes!(
            controller::content::qna::list_questions,
            controller::content::qna::ask_question
        ))
        .routes(routes!(controller::content::bank_account::list_bank_accounts))
        .routes(routes!(controller::auth::request_verification_code))
        .routes(routes!(controller::auth::verify_code))
        .routes(routes!(controller::auth::reset_password))
        .routes(routes!(controller::auth::change_password))
        .routes(routes!(controller::health::health))
        // Back-office
        .routes(routes!(controller::order::list_orders))
        .routes(routes!(
            controller::order::get_order,
            controller::order::update_order_status,
            controller::order::delete_order
        ))
        .routes(routes!(controller::order::classify_order))
        .routes(routes!(
            controller::assignment::list_assignments,
            controller::assignment::assign_slot
        ))
        .routes(routes!(controller::assignment::unassign_slot))
        .routes(routes!(
            controller::account::list_accounts,
            controller::account::create_account
        ))
        .routes(routes!(
            controller::account::get_account,
            controller::account::update_account,
            controller::account::delete_account
        ))
        .routes(routes!(controller::account::get_account_slots))
        .routes(routes!(
            controller::catalog::admin_list_products,
            controller::catalog::create_product
        ))
        .routes(routes!(
            controller::catalog::admin_get_product,
            controller::catalog::update_product,
            controller::catalog::delete_product
        ))
        .routes(routes!(controller::catalog::create_plan))
        .routes(routes!(
            controller::catalog::update_plan,
            controller::catalog::delete_plan
        ))
        .routes(routes!(controller::content::notice::create_notice))
        .routes(routes!(
            controller::content::notice::update_notice,
            controller::content::notice::delete_notice
        ))
        .routes(routes!(controller::content::faq::create_faq))
        .routes(routes!(
            controller::content::faq::update_faq,
            controller::content::faq::delete_faq
        ))
        .routes(routes!(controller::content::qna::answer_question))
        .routes(routes!(controller::content::qna::delete_question))
        .routes(routes!(
            controller::content::bank_account::admin_list_bank_accounts,
            controller::content::bank_account::create_bank_account
        ))
        .routes(routes!(
            controller::content::bank_account::update_bank_account,
            controller::content::bank_account::delete_bank_account
        ))
        .routes(routes!(controller::audit::slot_conflicts))
        .routes(routes!(controller::audit::unclassified_orders))
        .routes(routes!(controller::audit::orphaned_extensions))
        .routes(routes!(controller::audit::integrity_report))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
