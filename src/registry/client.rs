// RegistryClient resolves Docker Hub image references into tag lists.
// It authenticates at most once, at construction, and is immutable
// afterwards so a single instance can serve concurrent queries.

use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};
use crate::registry::auth::Auth;
use crate::registry::models::ImageTag;
use crate::registry::operations::RepositoryOperations;
use crate::registry::reference;
use crate::registry::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use tracing::debug;

pub struct RegistryClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    max_pages: Option<usize>,
}

impl RegistryClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
            max_pages: None,
        }
    }

    /// Use `transport` instead of a dedicated `reqwest` client
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub async fn build(self) -> Result<RegistryClient> {
        self.config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        let token = if self.config.has_credentials() {
            debug!(username = %self.config.username, "authenticating against login endpoint");
            Auth::new(transport.clone())
                .login(&self.config.login_url, &self.config.username, &self.config.password)
                .await
                .map_err(|e| RegistryError::ClientSetup { source: Box::new(e) })?
        } else {
            self.config.token
        };

        let mut repository = RepositoryOperations::new(transport, &token);
        if let Some(max_pages) = self.max_pages {
            repository = repository.with_max_pages(max_pages);
        }

        Ok(RegistryClient {
            repository,
            authenticated: !token.is_empty(),
        })
    }
}

#[derive(Clone)]
pub struct RegistryClient {
    repository: RepositoryOperations,
    authenticated: bool,
}

impl RegistryClient {
    pub async fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build().await
    }

    pub fn builder(config: ClientConfig) -> RegistryClientBuilder {
        RegistryClientBuilder::new(config)
    }

    /// Whether `image` lives on Docker Hub
    pub fn owns(&self, image: &str) -> bool {
        reference::owns(image)
    }

    /// Whether requests carry an Authorization header
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// All tags of `image`, one entry per tag and platform image with a digest,
    /// in the order the registry delivered them.
    pub async fn tags(&self, image: &str) -> Result<Vec<ImageTag>> {
        self.repository.list_tags(image).await
    }
}
