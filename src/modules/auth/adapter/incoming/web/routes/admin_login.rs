use actix_web::{http::header, web, Either, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::modules::auth::adapter::incoming::web::session_cookie::{
    session_cookie, session_principal, ADMIN_PATH,
};
use crate::modules::auth::application::domain::Principal;
use crate::modules::auth::application::ports::incoming::use_cases::LoginAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AdminLoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
struct LoginSuccess {
    principal: Principal,
    #[serde(rename = "redirectTo")]
    redirect_to: &'static str,
}

/// `GET /admin-login`
pub async fn admin_login_page(req: HttpRequest) -> HttpResponse {
    if session_principal(&req).is_some() {
        return HttpResponse::Found()
            .insert_header((header::LOCATION, ADMIN_PATH))
            .finish();
    }

    ApiResponse::message("Sign in with the admin email and password")
}

/// `POST /admin-login`, JSON or form encoded.
pub async fn admin_login_handler(
    body: Either<web::Json<AdminLoginForm>, web::Form<AdminLoginForm>>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let form = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    match data
        .login_admin_use_case
        .execute(&form.email, &form.password)
        .await
    {
        Ok(session) => {
            info!(email = %session.principal.email, "admin logged in");

            let mut response = ApiResponse::success(LoginSuccess {
                principal: session.principal,
                redirect_to: ADMIN_PATH,
            });
            let cookie = session_cookie(&session.token, session.expires_in, data.secure_cookies);
            if let Err(e) = response.add_cookie(&cookie) {
                error!(error = %e, "failed to attach session cookie");
                return ApiResponse::internal_error("Failed to sign in");
            }
            response
        }

        Err(LoginAdminError::InvalidCredentials) => {
            warn!("admin login rejected");
            ApiResponse::unauthorized("Invalid email or password")
        }

        Err(e) => {
            error!(error = %e, "admin login failed");
            ApiResponse::internal_error("Failed to sign in")
        }
    }
}
