use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Unsupported hash format")]
    UnsupportedFormat,

    #[error("Background task failed")]
    TaskFailed,
}

/// Hashes are self-describing strings: PHC for Argon2 (`$argon2id$...`),
/// modular crypt for bcrypt (`$2b$...`).
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a wrong password; `Err` only when the hash itself is unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
