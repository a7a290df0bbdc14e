//! Standardized error mapping for transport failures

use crate::error::RegistryError;

/// Network error categorization and handling
pub struct NetworkErrorHandler;

impl NetworkErrorHandler {
    /// Categorize a transport error with the operation it interrupted
    pub fn handle_network_error(error: &reqwest::Error, operation: &str) -> RegistryError {
        let text = error.to_string();
        let message = if error.is_timeout() {
            format!("request timed out: {}", text)
        } else if error.is_connect() {
            format!("connection error: {}", text)
        } else if text.contains("dns") {
            format!("DNS resolution error: {}", text)
        } else if text.contains("certificate") {
            format!("TLS certificate error: {}", text)
        } else if error.is_body() || error.is_decode() {
            format!("failed to read response body: {}", text)
        } else {
            text
        };

        RegistryError::Network {
            operation: operation.to_string(),
            message,
        }
    }
}

/// Validation helpers for values crossing the configuration boundary
pub struct ValidationErrorHandler;

impl ValidationErrorHandler {
    /// Parse an absolute URL, keeping the offending literal in the error
    pub fn parse_url(raw: &str) -> Result<url::Url, RegistryError> {
        url::Url::parse(raw).map_err(|e| RegistryError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }

    /// Token and username/password are mutually exclusive
    pub fn validate_credentials(
        username: &str,
        password: &str,
        token: &str,
    ) -> Result<(), RegistryError> {
        if (!username.is_empty() || !password.is_empty()) && !token.is_empty() {
            return Err(RegistryError::ConfigurationConflict);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_keeps_literal() {
        let err = ValidationErrorHandler::parse_url("not a url").unwrap_err();
        match err {
            RegistryError::InvalidUrl { url, .. } => assert_eq!(url, "not a url"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_credentials() {
        assert!(ValidationErrorHandler::validate_credentials("", "", "").is_ok());
        assert!(ValidationErrorHandler::validate_credentials("user", "pass", "").is_ok());
        assert!(ValidationErrorHandler::validate_credentials("", "", "tok").is_ok());
        assert!(matches!(
            ValidationErrorHandler::validate_credentials("user", "", "tok"),
            Err(RegistryError::ConfigurationConflict)
        ));
        assert!(matches!(
            ValidationErrorHandler::validate_credentials("", "pass", "tok"),
            Err(RegistryError::ConfigurationConflict)
        ));
    }
}
