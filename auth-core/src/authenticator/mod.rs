pub mod credential;
pub mod errors;
pub mod resolver;

pub use credential::CredentialAuthenticator;
pub use errors::AuthenticationError;
pub use resolver::TokenAuthenticator;
