use actix_web::{web, HttpResponse};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::session_cookie::cleared_session_cookie;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `POST /admin-logout`
pub async fn admin_logout_handler(data: web::Data<AppState>) -> HttpResponse {
    let mut response = ApiResponse::message("Signed out");

    if let Err(e) = response.add_cookie(&cleared_session_cookie(data.secure_cookies)) {
        error!(error = %e, "failed to clear session cookie");
        return ApiResponse::internal_error("Failed to sign out");
    }

    info!("admin session cleared");
    response
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};

    use crate::modules::auth::adapter::incoming::web::routes::init_auth_routes;
    use crate::modules::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_logout_expires_cookie() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TestAppStateBuilder::default().build()))
                .configure(init_auth_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/admin-logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .expect("removal cookie should be sent");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    }
}
