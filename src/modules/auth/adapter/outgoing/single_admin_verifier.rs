use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::modules::auth::application::domain::Principal;
use crate::modules::auth::application::ports::outgoing::{
    CredentialError, CredentialVerifier, PasswordHasher,
};

/// The one configured admin: an email plus a stored password hash.
pub struct SingleAdminVerifier {
    admin_email: String,
    password_hash: String,
    hasher: Arc<dyn PasswordHasher>,
}

impl SingleAdminVerifier {
    pub fn new(
        admin_email: impl Into<String>,
        password_hash: impl Into<String>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            admin_email: admin_email.into().trim().to_lowercase(),
            password_hash: password_hash.into(),
            hasher,
        }
    }
}

#[async_trait]
impl CredentialVerifier for SingleAdminVerifier {
    async fn verify(
        &self,
        identity: &str,
        secret: &str,
    ) -> Result<Option<Principal>, CredentialError> {
        let email = identity.trim().to_lowercase();
        if email.is_empty() || secret.is_empty() {
            return Ok(None);
        }

        // The hash is checked even for a wrong email so both cases cost the same.
        let password_ok = self
            .hasher
            .verify_password(secret, &self.password_hash)
            .await
            .map_err(|e| {
                warn!(error = %e, "stored admin password hash could not be checked");
                CredentialError::CheckFailed(e.to_string())
            })?;

        if email != self.admin_email || !password_ok {
            return Ok(None);
        }

        Ok(Some(Principal::admin(self.admin_email.clone())))
    }
}
