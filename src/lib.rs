//! # Gatekeep
//!
//! `gatekeep` is a small account service: users register an identity key and
//! a secret, log in to receive a signed access token, and present that token
//! to reach protected resources.
//!
//! ## Credentials
//!
//! Secrets are hashed with **Argon2id** (random salt per hash, optional
//! server-side pepper) and only the PHC string is stored. Plaintext secrets
//! are held in `SecretString` from the request body onwards so they never
//! reach logs.
//!
//! ## Tokens
//!
//! Access tokens are HS256 JWTs carrying the identity key (`sub`), issue time
//! and expiry. Verification is stateless: the signature and expiry are
//! recomputed on every request and nothing about issued tokens is stored.
//!
//! ## Error Disclosure
//!
//! Registration failures are reported as one generic error whatever the
//! cause. Login reports `Invalid credentials` for both unknown accounts and
//! wrong secrets so callers cannot probe which identity keys exist. The
//! detailed cause is only logged.

pub mod api;
pub mod auth;
pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
