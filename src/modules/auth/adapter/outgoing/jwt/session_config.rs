/// Signing settings for admin session tokens.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Lifetime in seconds.
    pub ttl_secs: i64,
}

impl SessionConfig {
    pub const MIN_SECRET_LEN: usize = 32;
    pub const MIN_TTL_SECS: i64 = 60;
    pub const MAX_TTL_SECS: i64 = 30 * 24 * 60 * 60;
    pub const DEFAULT_TTL_SECS: i64 = Self::MAX_TTL_SECS;
    pub const DEFAULT_ISSUER: &'static str = "portfolio-backend";
}
