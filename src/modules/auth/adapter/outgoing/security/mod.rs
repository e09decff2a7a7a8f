mod argon2_hasher;
mod bcrypt_hasher;
mod scheme_hasher;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;
pub use scheme_hasher::{HashScheme, SchemeAwareHasher};
