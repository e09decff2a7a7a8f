use async_trait::async_trait;

use crate::modules::auth::application::domain::Principal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Credential check failed: {0}")]
    CheckFailed(String),
}

/// Decides whether an identity/secret pair belongs to an admin.
///
/// A mismatch is `Ok(None)`; `Err` is reserved for failures of the check
/// itself, such as an unreadable stored hash.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(
        &self,
        identity: &str,
        secret: &str,
    ) -> Result<Option<Principal>, CredentialError>;
}
