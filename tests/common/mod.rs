//! Shared test double for the registry transport
//!
//! `RecordingTransport` answers GETs from a URL-keyed table and logins from a
//! single canned response, recording every call it receives.

#![allow(dead_code)]

use async_trait::async_trait;
use hub_tags::error::Result;
use hub_tags::registry::{HttpResponse, HttpTransport};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

pub const NGINX_TAGS_URL: &str =
    "https://registry.hub.docker.com/v2/repositories/library/nginx/tags";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedGet {
    pub url: String,
    pub authorization: Option<String>,
}

#[derive(Default)]
pub struct RecordingTransport {
    pages: HashMap<String, HttpResponse>,
    login: Option<HttpResponse>,
    gets: Mutex<Vec<RecordedGet>>,
    posts: Mutex<Vec<(String, String)>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), HttpResponse::new(200, body));
        self
    }

    pub fn with_login(mut self, status: u16, body: &str) -> Self {
        self.login = Some(HttpResponse::new(status, body));
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn gets(&self) -> Vec<RecordedGet> {
        self.gets.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.gets.lock().unwrap().len() + self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, url: &Url, authorization: Option<&str>) -> Result<HttpResponse> {
        self.gets.lock().unwrap().push(RecordedGet {
            url: url.to_string(),
            authorization: authorization.map(str::to_string),
        });

        Ok(self.pages.get(url.as_str()).cloned().unwrap_or_else(|| {
            HttpResponse::new(404, r#"{"message":"httperror 404: object not found"}"#)
        }))
    }

    async fn post_json(&self, url: &Url, body: String) -> Result<HttpResponse> {
        self.posts.lock().unwrap().push((url.to_string(), body));
        Ok(self
            .login
            .clone()
            .unwrap_or_else(|| HttpResponse::new(500, "no login response configured")))
    }
}

/// A tag-listing page body with `next` and pre-rendered result objects
pub fn page(next: &str, results: &[String]) -> String {
    format!(r#"{{"count":{},"next":"{}","results":[{}]}}"#, results.len(), next, results.join(","))
}

/// One result with a single linux image
pub fn result(name: &str, last_updated: &str, digest: &str, arch: &str) -> String {
    format!(
        r#"{{"name":"{}","last_updated":"{}","images":[{{"digest":"{}","os":"linux","Architecture":"{}"}}]}}"#,
        name, last_updated, digest, arch
    )
}
