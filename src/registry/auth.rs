//! Username/password login against Docker Hub

use crate::error::handlers::ValidationErrorHandler;
use crate::error::{RegistryError, Result};
use crate::registry::transport::HttpTransport;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Exchanges credentials for the token sent with tag-listing requests
#[derive(Clone)]
pub struct Auth {
    transport: Arc<dyn HttpTransport>,
}

impl Auth {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// POST the credentials to `login_url` and return the issued token.
    ///
    /// The token may be empty if the endpoint hands one out that way.
    pub async fn login(&self, login_url: &str, username: &str, password: &str) -> Result<String> {
        let url = ValidationErrorHandler::parse_url(login_url)?;
        let body = serde_json::to_string(&LoginRequest { username, password }).map_err(|e| {
            RegistryError::Config(format!("failed to encode login request: {}", e))
        })?;

        debug!(%url, username, "requesting registry token");
        let response = self.transport.post_json(&url, body).await?;

        if !response.is_ok() {
            warn!(status = response.status, "login endpoint rejected credentials");
            return Err(RegistryError::Authentication {
                status: response.status,
                body: response.body,
            });
        }

        let token_response: TokenResponse =
            serde_json::from_str(&response.body).map_err(|_| RegistryError::MalformedResponse {
                context: "login".to_string(),
                body: response.body.clone(),
            })?;

        let token = token_response.token.unwrap_or_default();
        debug!(token_len = token.len(), "registry token obtained");
        Ok(token)
    }
}
