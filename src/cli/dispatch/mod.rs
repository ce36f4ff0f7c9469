//! Map parsed arguments to the action to run.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::auth;
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or blank.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let dsn = matches
        .get_one::<String>("dsn")
        .filter(|dsn| !dsn.trim().is_empty())
        .cloned();

    let auth_opts = auth::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        dsn,
        signing_secret: auth_opts.signing_secret,
        token_ttl_seconds: auth_opts.token_ttl_seconds,
        password_pepper: auth_opts.password_pepper,
    }))
}
