use std::sync::Arc;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{web, HttpRequest};
use tracing::error;

use crate::modules::auth::application::domain::Principal;
use crate::modules::auth::application::ports::outgoing::SessionTokenProvider;

pub const SESSION_COOKIE: &str = "admin_session";
pub const LOGIN_PATH: &str = "/admin-login";
pub const ADMIN_PATH: &str = "/admin";

pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

pub fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie("", 0, secure);
    cookie.make_removal();
    cookie
}

/// The principal of a valid session cookie on `req`, if any.
pub fn session_principal(req: &HttpRequest) -> Option<Principal> {
    let cookie = req.cookie(SESSION_COOKIE)?;

    let Some(tokens) = req.app_data::<web::Data<Arc<dyn SessionTokenProvider>>>() else {
        error!("session token provider is not registered");
        return None;
    };

    tokens.verify(cookie.value()).ok()
}
