pub mod credential_verifier;
pub mod password_hasher;
pub mod session_token_provider;

pub use credential_verifier::{CredentialError, CredentialVerifier};
pub use password_hasher::{HashError, PasswordHasher};
pub use session_token_provider::{SessionToken, SessionTokenProvider, TokenError};
