//! Docker Hub tag resolution
//!
//! Resolves Docker Hub image references into flat lists of [`ImageTag`]s,
//! one per tag and platform image, each carrying the image digest, the
//! tag's last update time and the platform it was built for.
//!
//! ```no_run
//! # async fn demo() -> hub_tags::Result<()> {
//! use hub_tags::{ClientConfig, RegistryClient};
//!
//! let client = RegistryClient::new(ClientConfig::new()).await?;
//! if client.owns("docker.io/nginx") {
//!     for tag in client.tags("docker.io/nginx").await? {
//!         println!("{} {} {}/{}", tag.tag, tag.digest, tag.os, tag.architecture);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;

pub use config::ClientConfig;
pub use error::{RegistryError, Result};
pub use registry::{ImageTag, RegistryClient, RegistryClientBuilder};
