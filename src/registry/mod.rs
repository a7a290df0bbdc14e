//! Registry module for Docker Hub interactions
//!
//! This module provides login, image reference normalization and the
//! paginated tag listing used to resolve an image into [`ImageTag`]s.

pub mod auth;
pub mod client;
pub mod models;
pub mod operations;
pub mod reference;
pub mod transport;

pub use crate::config::ClientConfig;
pub use auth::Auth;
pub use client::{RegistryClient, RegistryClientBuilder};
pub use models::ImageTag;
pub use reference::owns;
pub use transport::{HttpResponse, HttpTransport, REQUEST_TIMEOUT, ReqwestTransport};
