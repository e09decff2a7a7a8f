use std::sync::Arc;

use actix_web::cookie::Cookie;

use crate::modules::auth::adapter::incoming::web::session_cookie::session_cookie;
use crate::modules::auth::adapter::outgoing::jwt::{JwtSessionService, SessionConfig};
use crate::modules::auth::application::domain::Principal;
use crate::modules::auth::application::ports::outgoing::SessionTokenProvider;

pub const TEST_ADMIN_EMAIL: &str = "owner@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "correct horse battery staple";

pub fn test_session_config() -> SessionConfig {
    SessionConfig {
        secret_key: std::env::var("TEST_SESSION_SECRET")
            .unwrap_or_else(|_| "FAKE_SESSION_SECRET_DO_NOT_USE_IN_PROD".to_string()),
        issuer: "portfolio-backend-test".to_string(),
        ttl_secs: 3600,
    }
}

pub fn test_session_tokens() -> Arc<dyn SessionTokenProvider> {
    Arc::new(JwtSessionService::new(test_session_config()))
}

/// A signed `admin_session` cookie for `principal`.
pub fn session_cookie_for(
    tokens: &Arc<dyn SessionTokenProvider>,
    principal: &Principal,
) -> Cookie<'static> {
    let token = tokens
        .issue(principal)
        .expect("test session token should be issued");
    session_cookie(&token.value, token.expires_in, false)
}

pub fn admin_cookie(tokens: &Arc<dyn SessionTokenProvider>) -> Cookie<'static> {
    session_cookie_for(tokens, &Principal::admin(TEST_ADMIN_EMAIL))
}
