pub mod claims;
pub mod clock;
pub mod codec;
pub mod errors;
pub mod signed;

pub use claims::IdentityClaim;
pub use clock::Clock;
pub use clock::SystemClock;
pub use codec::TokenCodec;
pub use errors::TokenError;
pub use signed::bearer_token;
pub use signed::AccessToken;
pub use signed::SignedToken;
