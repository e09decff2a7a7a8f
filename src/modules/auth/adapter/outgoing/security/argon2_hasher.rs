use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// Argon2id with PHC string output (`$argon2id$v=19$...`).
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, HashError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|_| HashError::HashFailed)?;

        Ok(Self { params })
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            // Parameters come from the PHC string, not from `self`.
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(1024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_argon2_hash_and_verify_password() {
        let hasher = fast_hasher();

        let hashed = hasher.hash_password("SecurePassword123").await.unwrap();
        assert!(hashed.starts_with("$argon2id$"));

        assert!(hasher
            .verify_password("SecurePassword123", &hashed)
            .await
            .unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_rejects_unparseable_hash() {
        let result = fast_hasher().verify_password("abc", "invalid-hash").await;
        assert_eq!(result, Err(HashError::VerifyFailed));
    }

    #[tokio::test]
    async fn test_verify_rejects_tampered_params() {
        let hasher = fast_hasher();
        let valid_hash = hasher.hash_password("password123").await.unwrap();

        let mut parts: Vec<&str> = valid_hash.split('$').collect();
        parts[3] = "m=0,t=0,p=0";
        let tampered = parts.join("$");

        let result = hasher.verify_password("password123", &tampered).await;
        assert_eq!(result, Err(HashError::VerifyFailed));
    }

    #[test]
    fn test_with_params_rejects_invalid_values() {
        assert!(Argon2Hasher::with_params(0, 0, 0).is_err());
    }
}
