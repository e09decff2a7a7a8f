use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};

use super::{Argon2Hasher, BcryptHasher};

/// Hashes with Argon2id and verifies whichever scheme the stored hash uses,
/// picked from its prefix.
#[derive(Clone, Default)]
pub struct SchemeAwareHasher {
    argon2: Argon2Hasher,
    bcrypt: BcryptHasher,
}

impl SchemeAwareHasher {
    pub fn new(argon2: Argon2Hasher, bcrypt: BcryptHasher) -> Self {
        Self { argon2, bcrypt }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    Argon2,
    Bcrypt,
}

impl HashScheme {
    pub fn detect(hash: &str) -> Option<Self> {
        if hash.starts_with("$argon2") {
            Some(HashScheme::Argon2)
        } else if hash.starts_with("$2") {
            Some(HashScheme::Bcrypt)
        } else {
            None
        }
    }
}

#[async_trait]
impl PasswordHasher for SchemeAwareHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.argon2.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match HashScheme::detect(hash) {
            Some(HashScheme::Argon2) => self.argon2.verify_password(password, hash).await,
            Some(HashScheme::Bcrypt) => self.bcrypt.verify_password(password, hash).await,
            None => Err(HashError::UnsupportedFormat),
        }
    }
}
