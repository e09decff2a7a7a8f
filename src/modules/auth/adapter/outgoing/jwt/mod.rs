mod jwt_session_service;
mod session_config;

pub use jwt_session_service::{JwtSessionService, SessionClaims};
pub use session_config::SessionConfig;
