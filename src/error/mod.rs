//! Error types for registry operations

pub mod handlers;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// Token and username/password were configured together
    #[error("Configuration conflict: cannot specify a token as well as username/password")]
    ConfigurationConflict,

    /// Login endpoint answered with a non-200 status
    #[error("Authentication failed (status {status}): {body}")]
    Authentication { status: u16, body: String },

    /// Client construction failed while setting up authentication
    #[error("Failed to set up registry client: {source}")]
    ClientSetup {
        #[source]
        source: Box<RegistryError>,
    },

    /// Transport level failure (DNS, connect, timeout, TLS)
    #[error("Network error during {operation}: {message}")]
    Network { operation: String, message: String },

    /// Response body did not have the expected shape
    #[error("Unexpected {context} response: {body}")]
    MalformedResponse { context: String, body: String },

    /// A tag's last_updated value is not an RFC3339 timestamp
    #[error("Failed to parse timestamp {value:?} of tag {tag:?}: {reason}")]
    MalformedTimestamp {
        tag: String,
        value: String,
        reason: String,
    },

    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Pagination did not terminate within the page bound
    #[error("Tag listing exceeded {limit} pages")]
    PageLimitExceeded { limit: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller abandoned the operation (Ctrl-C)
    #[error("Operation cancelled")]
    Cancelled,
}

impl RegistryError {
    /// Raw response text attached to the error, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            RegistryError::Authentication { body, .. }
            | RegistryError::MalformedResponse { body, .. } => Some(body),
            RegistryError::ClientSetup { source } => source.body(),
            _ => None,
        }
    }
}
