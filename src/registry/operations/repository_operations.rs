//! Repository operations for the Docker Hub tag listing
//!
//! Walks `GET /v2/repositories/{namespace}/{name}/tags` page by page,
//! following the `next` link of each response until the registry stops
//! handing one out, and flattens every page into [`ImageTag`]s.

use crate::error::handlers::ValidationErrorHandler;
use crate::error::{RegistryError, Result};
use crate::registry::models::{ImageTag, TagPage};
use crate::registry::reference;
use crate::registry::transport::HttpTransport;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Upper bound on followed `next` links for a single listing
pub const MAX_PAGES: usize = 10_000;

#[derive(Clone)]
pub struct RepositoryOperations {
    transport: Arc<dyn HttpTransport>,
    authorization: Option<String>,
    max_pages: usize,
}

impl RepositoryOperations {
    /// An empty token means requests go out without an Authorization header.
    pub fn new(transport: Arc<dyn HttpTransport>, token: &str) -> Self {
        let authorization = if token.is_empty() {
            None
        } else {
            Some(format!("JWT {}", token))
        };

        Self {
            transport,
            authorization,
            max_pages: MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// List every tag of `image` across all pages.
    ///
    /// Any failure discards the tags gathered so far.
    pub async fn list_tags(&self, image: &str) -> Result<Vec<ImageTag>> {
        let repository = reference::repository_path(image);
        let mut next = reference::tags_url(image);
        let mut tags = Vec::new();
        let mut pages = 0;

        while !next.is_empty() {
            if pages == self.max_pages {
                return Err(RegistryError::PageLimitExceeded {
                    limit: self.max_pages,
                });
            }
            pages += 1;

            let mut page = self.fetch_page(&next).await?;
            debug!(
                repository = %repository,
                page = pages,
                results = page.results.len(),
                "fetched tag page"
            );

            next = std::mem::take(&mut page.next);
            page.flatten_into(&mut tags)?;
        }

        info!(repository = %repository, pages, tags = tags.len(), "resolved image tags");
        Ok(tags)
    }

    async fn fetch_page(&self, raw_url: &str) -> Result<TagPage> {
        let url = force_https(raw_url)?;
        let response = self
            .transport
            .get(&url, self.authorization.as_deref())
            .await?;
        TagPage::parse(&response.body)
    }
}

/// Parse `raw` and rewrite its scheme to https
pub(crate) fn force_https(raw: &str) -> Result<Url> {
    let mut url = ValidationErrorHandler::parse_url(raw)?;
    if url.scheme() != "https" && url.set_scheme("https").is_err() {
        return Err(RegistryError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("cannot switch scheme {:?} to https", url.scheme()),
        });
    }
    Ok(url)
}
