use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminSession, LoginAdminError, LoginAdminUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    CredentialVerifier, SessionTokenProvider,
};

#[derive(Clone)]
pub struct LoginAdminService {
    verifier: Arc<dyn CredentialVerifier>,
    tokens: Arc<dyn SessionTokenProvider>,
}

impl LoginAdminService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, tokens: Arc<dyn SessionTokenProvider>) -> Self {
        Self { verifier, tokens }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, email: &str, password: &str) -> Result<AdminSession, LoginAdminError> {
        let principal = self
            .verifier
            .verify(email, password)
            .await
            .map_err(|e| LoginAdminError::VerificationFailed(e.to_string()))?
            .ok_or(LoginAdminError::InvalidCredentials)?;

        let token = self
            .tokens
            .issue(&principal)
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        info!(email = %principal.email, role = %principal.role, "admin session issued");

        Ok(AdminSession {
            token: token.value,
            expires_in: token.expires_in,
            principal,
        })
    }
}
