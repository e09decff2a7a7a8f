use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::admin::application::ports::incoming::use_cases::GetDashboardError;
use crate::modules::auth::adapter::incoming::web::extractors::AdminPrincipal;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /admin`
pub async fn admin_dashboard_handler(
    principal: AdminPrincipal,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.get_dashboard_use_case.execute().await {
        Ok(summary) => ApiResponse::keyed("dashboard", summary),

        Err(GetDashboardError::RepositoryError(e)) => {
            error!(email = %principal.0.email, "Repository error building dashboard: {}", e);
            ApiResponse::internal_error("Failed to load dashboard")
        }
    }
}
