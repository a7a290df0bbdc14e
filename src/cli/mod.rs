//! Command line interface module
//!
//! Argument parsing and the runner that resolves the requested images and
//! prints their tags.

pub mod args;
pub mod runner;

pub use args::Args;
pub use runner::Runner;
