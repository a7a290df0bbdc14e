//! Client configuration and environment loading

use crate::error::handlers::ValidationErrorHandler;
use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Docker Hub's username/password login endpoint
pub const DEFAULT_LOGIN_URL: &str = "https://hub.docker.com/v2/users/login/";

pub const ENV_LOGIN_URL: &str = "DOCKERHUB_LOGIN_URL";
pub const ENV_USERNAME: &str = "DOCKERHUB_USERNAME";
pub const ENV_PASSWORD: &str = "DOCKERHUB_PASSWORD";
pub const ENV_TOKEN: &str = "DOCKERHUB_TOKEN";

/// Settings consumed by [`RegistryClient`](crate::registry::RegistryClient).
///
/// Empty strings mean "not set". A pre-supplied `token` and
/// `username`/`password` cannot be combined.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub login_url: String,
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            username: String::new(),
            password: String::new(),
            token: String::new(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("login_url", &self.login_url)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("token", &redact(&self.token))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "<redacted>" }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = login_url.into();
        self
    }

    /// Load from `DOCKERHUB_*` environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_LOGIN_URL).filter(|v| !v.is_empty()) {
            config.login_url = url;
        }
        config.username = lookup(ENV_USERNAME).unwrap_or_default();
        config.password = lookup(ENV_PASSWORD).unwrap_or_default();
        config.token = lookup(ENV_TOKEN).unwrap_or_default();

        config.validate().map_err(|e| {
            RegistryError::Config(format!(
                "invalid {}/{} environment: {}",
                ENV_USERNAME, ENV_TOKEN, e
            ))
        })?;
        Ok(config)
    }

    /// Whether the login endpoint has to be called to obtain a token
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        ValidationErrorHandler::validate_credentials(&self.username, &self.password, &self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.login_url, DEFAULT_LOGIN_URL);
        assert!(!config.has_credentials());
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_env_credentials() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_USERNAME, "alice"),
            (ENV_PASSWORD, "s3cret"),
            (ENV_LOGIN_URL, "https://login.example.com/"),
        ]))
        .unwrap();
        assert!(config.has_credentials());
        assert_eq!(config.username, "alice");
        assert_eq!(config.login_url, "https://login.example.com/");
    }

    #[test]
    fn test_env_conflict_is_rejected() {
        let lookup = lookup_from(&[(ENV_USERNAME, "alice"), (ENV_TOKEN, "abc")]);
        let err = ClientConfig::from_lookup(lookup).unwrap_err();
        assert!(matches!(err, RegistryError::Config(_)));
    }

    #[test]
    fn test_password_only_counts_as_credentials() {
        let config = ClientConfig::new().with_credentials("", "pw");
        assert!(config.has_credentials());
        assert!(config.clone().with_token("t").validate().is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ClientConfig::new().with_credentials("bob", "hunter2");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("bob"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig = serde_json::from_str(r#"{"token":"xyz"}"#).unwrap();
        assert_eq!(config.token, "xyz");
        assert_eq!(config.login_url, DEFAULT_LOGIN_URL);
    }
}
