use actix_web::HttpResponse;

use crate::modules::auth::adapter::incoming::web::extractors::AdminPrincipal;
use crate::shared::api::ApiResponse;

/// `GET /admin/session`
pub async fn admin_session_handler(principal: AdminPrincipal) -> HttpResponse {
    ApiResponse::keyed("principal", principal.0)
}
