//! Credential resolution and client configuration.
//!
//! The API key is resolved once at the program's entry point and carried in a
//! [`Config`]; resource calls never consult the environment themselves.

use crate::{Error, Result};
use std::fmt;
use std::sync::Once;

/// Environment variable holding the AgentMail API key.
pub const API_KEY_ENV: &str = "AGENTMAIL_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "AGENTMAIL_BASE_URL";

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.agentmail.to/v0";

static DOTENV: Once = Once::new();

/// Secret API key authorizing calls to AgentMail.
///
/// The `Debug` output is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an API key. Blank keys are rejected.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::Configuration("API key must not be empty".into()));
        }
        Ok(Self(key))
    }

    /// The raw key.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Load `.env` from the working directory (or a parent) into the process
/// environment, at most once per process.
///
/// Variables that are already set are left untouched.
pub fn load_dotenv() {
    DOTENV.call_once(|| match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => tracing::trace!("no .env file found"),
        Err(err) => tracing::warn!(error = %err, "could not load .env file"),
    });
}

/// Resolve the API key to use.
///
/// A non-empty `explicit` key always wins. Otherwise `.env` is loaded (if
/// present) and [`API_KEY_ENV`] is read.
///
/// # Errors
/// [`Error::Configuration`] when neither source yields a key.
pub fn resolve_api_key(explicit: Option<&str>) -> Result<Credential> {
    if let Some(key) = non_empty(explicit) {
        return Credential::new(key);
    }
    load_dotenv();
    resolve_api_key_with(None, |name| std::env::var(name).ok())
}

/// Resolve the API key using `lookup` in place of the process environment.
pub fn resolve_api_key_with<F>(explicit: Option<&str>, lookup: F) -> Result<Credential>
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(key) = non_empty(explicit) {
        return Credential::new(key);
    }
    match lookup(API_KEY_ENV) {
        Some(key) if !key.trim().is_empty() => Credential::new(key),
        _ => Err(Error::Configuration(format!(
            "API key is required; pass it explicitly or set {API_KEY_ENV}"
        ))),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Settings needed to build a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent as a bearer token.
    pub credential: Credential,
    /// Base URL every resource path is appended to.
    pub base_url: String,
}

impl Config {
    /// Configuration for the production endpoint.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read configuration from the environment (after loading `.env`).
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = resolve_api_key_with(None, &lookup)?;
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            credential,
            base_url,
        })
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(key: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name| (name == API_KEY_ENV).then_some(key).flatten().map(str::to_string)
    }

    #[test]
    fn explicit_key_beats_environment() {
        let credential = resolve_api_key_with(Some("explicit"), env(Some("from-env"))).unwrap();
        assert_eq!(credential.expose(), "explicit");
    }

    #[test]
    fn blank_explicit_key_falls_back_to_environment() {
        let credential = resolve_api_key_with(Some("  "), env(Some("from-env"))).unwrap();
        assert_eq!(credential.expose(), "from-env");
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = resolve_api_key_with(None, env(None)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = resolve_api_key_with(None, env(Some(""))).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn config_reads_base_url_override() {
        let config = Config::from_lookup(|name| match name {
            API_KEY_ENV => Some("k".into()),
            BASE_URL_ENV => Some("http://localhost:9000".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");

        let config = Config::from_lookup(env(Some("k"))).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn debug_output_hides_the_key() {
        let credential = Credential::new("am_secret").unwrap();
        assert!(!format!("{credential:?}").contains("am_secret"));
    }
}
