use argon2::Params;
use secrecy::SecretString;

const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Everything the workflows need, built once at startup from CLI/env values.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    signing_secret: SecretString,
    token_ttl_seconds: i64,
    password_pepper: Option<SecretString>,
    hash_params: Params,
}

impl AuthConfig {
    #[must_use]
    pub fn new(signing_secret: SecretString) -> Self {
        Self {
            signing_secret,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
            password_pepper: None,
            hash_params: Params::default(),
        }
    }

    #[must_use]
    pub fn with_token_ttl_seconds(mut self, seconds: i64) -> Self {
        self.token_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_password_pepper(mut self, pepper: Option<SecretString>) -> Self {
        self.password_pepper = pepper;
        self
    }

    /// Override the Argon2 cost parameters used for new hashes.
    #[must_use]
    pub fn with_hash_params(mut self, params: Params) -> Self {
        self.hash_params = params;
        self
    }

    #[must_use]
    pub fn signing_secret(&self) -> &SecretString {
        &self.signing_secret
    }

    #[must_use]
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }

    #[must_use]
    pub fn password_pepper(&self) -> Option<&SecretString> {
        self.password_pepper.as_ref()
    }

    #[must_use]
    pub fn hash_params(&self) -> &Params {
        &self.hash_params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults() {
        let config = AuthConfig::new(SecretString::from("s3cret"));
        assert_eq!(config.signing_secret().expose_secret(), "s3cret");
        assert_eq!(config.token_ttl_seconds(), 3600);
        assert!(config.password_pepper().is_none());
        assert_eq!(config.hash_params().m_cost(), Params::default().m_cost());
    }

    #[test]
    fn builder_overrides() {
        let config = AuthConfig::new(SecretString::from("s3cret"))
            .with_token_ttl_seconds(60)
            .with_password_pepper(Some(SecretString::from("pepper")));
        assert_eq!(config.token_ttl_seconds(), 60);
        assert_eq!(
            config.password_pepper().map(|pepper| pepper.expose_secret()),
            Some("pepper")
        );
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = AuthConfig::new(SecretString::from("s3cret"))
            .with_password_pepper(Some(SecretString::from("hot-sauce")));
        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("hot-sauce"));
    }
}
