use async_trait::async_trait;

use crate::modules::auth::application::domain::Principal;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminSession, LoginAdminError, LoginAdminUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    HashError, PasswordHasher, SessionToken, SessionTokenProvider, TokenError,
};
use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

// ============================================================================
// Content
// ============================================================================

/// Every call fails with a database error.
#[derive(Default, Clone)]
pub struct FailingContentRepository;

fn db_down() -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError("connection refused".to_string())
}

#[async_trait]
impl<C: Content> ContentRepository<C> for FailingContentRepository {
    async fn list(&self) -> Result<Vec<C>, ContentRepositoryError> {
        Err(db_down())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<C>, ContentRepositoryError> {
        Err(db_down())
    }

    async fn create(&self, _input: C::Input) -> Result<C, ContentRepositoryError> {
        Err(db_down())
    }

    async fn replace(&self, _id: i32, _input: C::Input) -> Result<C, ContentRepositoryError> {
        Err(db_down())
    }

    async fn delete(&self, _id: i32) -> Result<(), ContentRepositoryError> {
        Err(db_down())
    }

    async fn count(&self) -> Result<u64, ContentRepositoryError> {
        Err(db_down())
    }
}

// ============================================================================
// Auth
// ============================================================================

/// Stores passwords as `plain$<password>`; keeps HTTP tests free of real hashing cost.
#[derive(Default, Clone)]
pub struct PlaintextHasher;

impl PlaintextHasher {
    pub fn hash(password: &str) -> String {
        format!("plain${}", password)
    }
}

#[async_trait]
impl PasswordHasher for PlaintextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::hash(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match hash.strip_prefix("plain$") {
            Some(stored) => Ok(stored == password),
            None => Err(HashError::UnsupportedFormat),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubSessionTokens {
    fail: bool,
}

impl StubSessionTokens {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl SessionTokenProvider for StubSessionTokens {
    fn issue(&self, principal: &Principal) -> Result<SessionToken, TokenError> {
        if self.fail {
            return Err(TokenError::EncodingError("signing key unavailable".to_string()));
        }
        Ok(SessionToken {
            value: format!("stub-token-for-{}", principal.email),
            expires_in: 60,
        })
    }

    fn verify(&self, token: &str) -> Result<Principal, TokenError> {
        match token.strip_prefix("stub-token-for-") {
            Some(email) if !self.fail => Ok(Principal::admin(email)),
            _ => Err(TokenError::MalformedToken),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubLoginAdmin {
    fail: bool,
}

impl StubLoginAdmin {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl LoginAdminUseCase for StubLoginAdmin {
    async fn execute(&self, email: &str, _password: &str) -> Result<AdminSession, LoginAdminError> {
        if self.fail {
            return Err(LoginAdminError::VerificationFailed(
                "credential store unavailable".to_string(),
            ));
        }
        Ok(AdminSession {
            token: format!("stub-token-for-{}", email),
            expires_in: 60,
            principal: Principal::admin(email),
        })
    }
}
