pub mod jwt;
pub mod security;
mod single_admin_verifier;

pub use single_admin_verifier::SingleAdminVerifier;
