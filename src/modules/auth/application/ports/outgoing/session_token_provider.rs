use crate::modules::auth::application::domain::Principal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Signed session token plus its lifetime in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub value: String,
    pub expires_in: i64,
}

pub trait SessionTokenProvider: Send + Sync {
    fn issue(&self, principal: &Principal) -> Result<SessionToken, TokenError>;

    fn verify(&self, token: &str) -> Result<Principal, TokenError>;
}
