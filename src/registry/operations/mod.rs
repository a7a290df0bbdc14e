//! Registry operations backing the public client API in client.rs

pub mod repository_operations;

pub use repository_operations::{MAX_PAGES, RepositoryOperations};
