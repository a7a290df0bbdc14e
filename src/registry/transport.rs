//! HTTP transport seam for registry calls
//!
//! The client talks to the network only through [`HttpTransport`], so the
//! `reqwest` implementation below can be swapped for a shared process-wide
//! client or a recording double in tests.

use crate::error::handlers::NetworkErrorHandler;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use url::Url;

/// Ceiling applied to every individual registry request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Status and fully read body of one HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url`, sending `authorization` verbatim as the Authorization header when present
    async fn get(&self, url: &Url, authorization: Option<&str>) -> Result<HttpResponse>;

    /// POST a JSON document to `url`
    async fn post_json(&self, url: &Url, body: String) -> Result<HttpResponse>;
}

/// [`HttpTransport`] backed by a `reqwest` client with a bounded timeout
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hub-tags/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "transport setup"))?;
        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one shared across several registry backends
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url, authorization: Option<&str>) -> Result<HttpResponse> {
        let mut request = self.client.get(url.clone());
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "tag listing"))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "tag listing"))?;

        Ok(HttpResponse { status, body })
    }

    async fn post_json(&self, url: &Url, body: String) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "login"))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "login"))?;

        Ok(HttpResponse { status, body })
    }
}
