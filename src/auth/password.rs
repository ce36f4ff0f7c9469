//! Secret hashing and verification with Argon2id.
//!
//! Every hash gets a fresh random salt, so hashing the same secret twice
//! yields two different PHC strings that both verify. When a pepper is
//! configured it keys Argon2 (`new_with_secret`) and must be identical at
//! verification time.

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};

use super::error::AuthError;

#[derive(Clone, Debug, Default)]
pub struct CredentialHasher {
    pepper: Option<SecretString>,
    params: Params,
}

impl CredentialHasher {
    #[must_use]
    pub fn new(pepper: Option<SecretString>, params: Params) -> Self {
        Self { pepper, params }
    }

    fn argon2(&self) -> Result<Argon2<'_>, AuthError> {
        match &self.pepper {
            Some(pepper) => Argon2::new_with_secret(
                pepper.expose_secret().as_bytes(),
                Algorithm::Argon2id,
                Version::V0x13,
                self.params.clone(),
            )
            .map_err(|e| AuthError::Hashing(format!("failed to initialize Argon2id: {e}"))),
            None => Ok(Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                self.params.clone(),
            )),
        }
    }

    /// Derive a salted PHC hash of `plaintext`.
    ///
    /// # Errors
    /// Returns `AuthError::Hashing` if Argon2 cannot be initialized or fails.
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()?
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(format!("failed to hash secret: {e}")))?
            .to_string();
        Ok(hash)
    }

    /// Check `plaintext` against a stored PHC hash.
    ///
    /// Returns `Ok(false)` on mismatch.
    ///
    /// # Errors
    /// Returns `AuthError::Hashing` if the stored hash cannot be parsed or
    /// verification fails for a reason other than a mismatch.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AuthError::Hashing(format!("invalid hash format: {e}")))?;

        match self.argon2()?.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Hashing(format!("verify error: {e}"))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // Cheap parameters keep debug-build tests fast; production uses defaults.
    fn test_params() -> Params {
        Params::new(1024, 1, 1, None).unwrap()
    }

    fn hasher(pepper: Option<&str>) -> CredentialHasher {
        CredentialHasher::new(pepper.map(SecretString::from), test_params())
    }

    #[test]
    fn hash_then_verify() {
        let hasher = hasher(None);
        let hash = hasher.hash("pw123").unwrap();
        assert!(hasher.verify("pw123", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn hash_is_salted_and_never_plaintext() {
        let hasher = hasher(None);
        let first = hasher.hash("pw123").unwrap();
        let second = hasher.hash("pw123").unwrap();

        assert_ne!(first, second);
        assert_ne!(first, "pw123");
        assert!(first.starts_with("$argon2id$"));
        assert!(hasher.verify("pw123", &first).unwrap());
        assert!(hasher.verify("pw123", &second).unwrap());
    }

    #[test]
    fn pepper_is_applied() {
        let peppered = hasher(Some("pepper!"));
        let hash = peppered.hash("hunter2").unwrap();
        assert!(peppered.verify("hunter2", &hash).unwrap());

        assert!(!hasher(None).verify("hunter2", &hash).unwrap());
        assert!(!hasher(Some("other")).verify("hunter2", &hash).unwrap());
    }

    #[test]
    fn verify_uses_params_from_stored_hash() {
        let hash = hasher(None).hash("pw").unwrap();
        let stronger = CredentialHasher::new(None, Params::new(2048, 2, 1, None).unwrap());
        assert!(stronger.verify("pw", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_returns_error() {
        let result = hasher(None).verify("pw", "not-a-hash");
        assert!(matches!(result, Err(AuthError::Hashing(_))));

        let result = hasher(None).verify("pw", "");
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }

    #[test]
    fn empty_and_unicode_secrets_round_trip() {
        let hasher = hasher(None);
        for secret in ["", "pässwörd 🔑", " leading and trailing "] {
            let hash = hasher.hash(secret).unwrap();
            assert!(hasher.verify(secret, &hash).unwrap());
        }
    }
}
