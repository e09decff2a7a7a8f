use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// Verifies `$2a$`/`$2b$`/`$2y$` hashes.
#[derive(Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost).map_err(|_| HashError::HashFailed))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        let hasher = BcryptHasher::with_cost(4);

        let hashed = hasher.hash_password("SecurePassword123").await.unwrap();
        assert!(hashed.starts_with("$2"));

        assert!(hasher
            .verify_password("SecurePassword123", &hashed)
            .await
            .unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).await.unwrap());

        let invalid = hasher.verify_password("SecurePassword123", "invalid-hash").await;
        assert_eq!(invalid, Err(HashError::VerifyFailed));
    }
}
