use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use utoipa::ToSchema;

use super::error::AuthError;

/// Identity key + secret, as posted to `/register` and `/login`.
///
/// `username`/`password` are accepted as aliases. Missing fields deserialize
/// as empty and are rejected by `validate`.
#[derive(ToSchema, Deserialize, Debug, Clone)]
pub struct Credentials {
    #[serde(rename = "identityKey", alias = "username", default)]
    pub identity_key: String,
    #[serde(alias = "password", default)]
    #[schema(value_type = String, format = Password)]
    pub secret: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(identity_key: &str, secret: &str) -> Self {
        Self {
            identity_key: identity_key.to_string(),
            secret: SecretString::from(secret),
        }
    }

    /// # Errors
    /// Returns `AuthError::Validation` if either field is empty.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.identity_key.trim().is_empty() {
            return Err(AuthError::Validation("identity key is required"));
        }
        if self.secret.expose_secret().is_empty() {
            return Err(AuthError::Validation("secret is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_canonical_and_alias_fields() {
        let canonical: Credentials =
            serde_json::from_value(json!({"identityKey": "alice", "secret": "pw123"})).unwrap();
        assert_eq!(canonical.identity_key, "alice");
        assert_eq!(canonical.secret.expose_secret(), "pw123");

        let aliased: Credentials =
            serde_json::from_value(json!({"username": "bob", "password": "pw"})).unwrap();
        assert_eq!(aliased.identity_key, "bob");
        assert_eq!(aliased.secret.expose_secret(), "pw");
    }

    #[test]
    fn missing_fields_fail_validation() {
        let empty: Credentials = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(empty.validate(), Err(AuthError::Validation(_))));

        assert!(Credentials::new("alice", "").validate().is_err());
        assert!(Credentials::new("   ", "pw").validate().is_err());
        assert!(Credentials::new("alice", "pw").validate().is_ok());
    }

    #[test]
    fn debug_hides_secret() {
        let credentials = Credentials::new("alice", "pw123");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("pw123"));
    }
}
