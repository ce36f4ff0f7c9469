//! Credential hashing, token issuance and the account workflows built on them.

mod config;
mod credentials;
mod error;
pub mod gate;
pub mod password;
mod service;
pub mod token;

pub use config::AuthConfig;
pub use credentials::Credentials;
pub use error::AuthError;
pub use password::CredentialHasher;
pub use service::AuthService;
pub use token::{Claims, TokenIssuer};
