pub mod argon2;
pub mod digest;
pub mod errors;

pub use self::argon2::PasswordHasher;
pub use digest::PasswordDigest;
pub use errors::PasswordError;
