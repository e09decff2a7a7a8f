use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::{Principal, Role};
use crate::modules::auth::application::ports::outgoing::{
    SessionToken, SessionTokenProvider, TokenError,
};

use super::session_config::SessionConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub jti: String,
    pub iss: String,
}

/// HS256 session tokens.
#[derive(Clone)]
pub struct JwtSessionService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtSessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSessionService")
            .field("issuer", &self.config.issuer)
            .field("ttl_secs", &self.config.ttl_secs)
            .finish()
    }
}

impl JwtSessionService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation
    }
}

impl SessionTokenProvider for JwtSessionService {
    fn issue(&self, principal: &Principal) -> Result<SessionToken, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.ttl_secs);

        let claims = SessionClaims {
            sub: principal.email.clone(),
            email: principal.email.clone(),
            role: principal.role,
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
            iss: self.config.issuer.clone(),
        };

        let value = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(SessionToken {
            value,
            expires_in: self.config.ttl_secs,
        })
    }

    fn verify(&self, token: &str) -> Result<Principal, TokenError> {
        let decoded = decode::<SessionClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session token rejected: expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Session token rejected: not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Security alert: invalid session token signature");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Session token rejected: malformed");
                        TokenError::MalformedToken
                    }
                }
            })?;

        let claims = decoded.claims;
        Ok(Principal {
            email: claims.email,
            role: claims.role,
        })
    }
}
