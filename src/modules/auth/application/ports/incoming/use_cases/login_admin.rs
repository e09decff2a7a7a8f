use async_trait::async_trait;

use crate::modules::auth::application::domain::Principal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Credential verification failed: {0}")]
    VerificationFailed(String),

    #[error("Session token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
    pub expires_in: i64,
    pub principal: Principal,
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str) -> Result<AdminSession, LoginAdminError>;
}
