use crate::{
    api,
    auth::{AuthConfig, AuthService},
    store::{AccountStore, MemoryAccountStore, PgAccountStore},
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: Option<String>,
    pub signing_secret: SecretString,
    pub token_ttl_seconds: i64,
    pub password_pepper: Option<SecretString>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database is unreachable or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let store: Arc<dyn AccountStore> = match &args.dsn {
        Some(dsn) => {
            info!("Connecting to account store at {}", redact_dsn(dsn));
            Arc::new(
                PgAccountStore::connect(dsn)
                    .await
                    .context("Failed to connect to database")?,
            )
        }
        None => {
            warn!("No DSN configured, accounts are kept in memory and lost on restart");
            Arc::new(MemoryAccountStore::new())
        }
    };

    if args.password_pepper.is_none() {
        info!("No password pepper configured");
    }

    let config = AuthConfig::new(args.signing_secret)
        .with_token_ttl_seconds(args.token_ttl_seconds)
        .with_password_pepper(args.password_pepper);

    let service = Arc::new(AuthService::new(store, &config));

    api::new(args.port, service).await
}

/// Hide the password in a DSN before it reaches the logs.
fn redact_dsn(dsn: &str) -> String {
    match Url::parse(dsn) {
        Ok(mut url) => {
            if url.password().is_some() && url.set_password(Some("****")).is_err() {
                return "<unparseable dsn>".to_string();
            }
            url.to_string()
        }
        Err(_) => "<unparseable dsn>".to_string(),
    }
}
