use anyhow::{Result, anyhow};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_SIGNING_SECRET: &str = "signing-secret";
pub const ARG_TOKEN_TTL_SECONDS: &str = "token-ttl-seconds";
pub const ARG_PASSWORD_PEPPER: &str = "password-pepper";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_SIGNING_SECRET)
                .long(ARG_SIGNING_SECRET)
                .help("HMAC secret used to sign and verify access tokens")
                .env("GATEKEEP_SIGNING_SECRET")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_TOKEN_TTL_SECONDS)
                .long(ARG_TOKEN_TTL_SECONDS)
                .help("Access token lifetime in seconds")
                .env("GATEKEEP_TOKEN_TTL_SECONDS")
                .default_value("3600")
                .value_parser(clap::value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new(ARG_PASSWORD_PEPPER)
                .long(ARG_PASSWORD_PEPPER)
                .help("Server-side secret mixed into every password hash")
                .long_help(
                    "Server-side secret mixed into every password hash. Changing or removing it invalidates all stored hashes.",
                )
                .env("GATEKEEP_PASSWORD_PEPPER")
                .hide_env_values(true),
        )
}

#[derive(Debug)]
pub struct Options {
    pub signing_secret: SecretString,
    pub token_ttl_seconds: i64,
    pub password_pepper: Option<SecretString>,
}

impl Options {
    /// # Errors
    /// Returns an error if the signing secret is missing or blank.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let signing_secret = matches
            .get_one::<String>(ARG_SIGNING_SECRET)
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| anyhow!("missing required argument: --{ARG_SIGNING_SECRET}"))?;

        let token_ttl_seconds = matches
            .get_one::<i64>(ARG_TOKEN_TTL_SECONDS)
            .copied()
            .unwrap_or(3600);

        let password_pepper = matches
            .get_one::<String>(ARG_PASSWORD_PEPPER)
            .filter(|pepper| !pepper.is_empty())
            .map(|pepper| SecretString::from(pepper.as_str()));

        Ok(Self {
            signing_secret: SecretString::from(signing_secret.as_str()),
            token_ttl_seconds,
            password_pepper,
        })
    }
}
