//! Command-line argument parsing

use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hub-tags")]
#[command(about = "List Docker Hub image tags with digest, timestamp and platform")]
#[command(version)]
pub struct Args {
    /// Image references, e.g. docker.io/nginx or registry.hub.docker.com/myorg/app
    #[arg(required = true, value_name = "IMAGE")]
    pub images: Vec<String>,

    #[arg(
        long = "username",
        short = 'u',
        help = "Username for Docker Hub login (env: DOCKERHUB_USERNAME)"
    )]
    pub username: Option<String>,

    #[arg(
        long = "password",
        short = 'p',
        help = "Password for Docker Hub login (env: DOCKERHUB_PASSWORD)"
    )]
    pub password: Option<String>,

    #[arg(
        long = "token",
        help = "Pre-issued token, exclusive with username/password (env: DOCKERHUB_TOKEN)"
    )]
    pub token: Option<String>,

    #[arg(
        long = "login-url",
        help = "Login endpoint used with username/password (env: DOCKERHUB_LOGIN_URL)"
    )]
    pub login_url: Option<String>,

    /// Treat references without a Docker Hub prefix as Docker Hub images
    #[arg(long = "assume-hub")]
    pub assume_hub: bool,

    #[arg(
        long = "output",
        short = 'o',
        default_value = "text",
        help = "Output format: text, json"
    )]
    pub output: String,

    #[arg(long = "verbose", short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long = "quiet", short = 'q', help = "Only print results and errors")]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        match self.output.as_str() {
            "text" | "json" => {}
            other => {
                return Err(RegistryError::Config(format!(
                    "output format must be one of: text, json (got {:?})",
                    other
                )));
            }
        }

        if self.verbose && self.quiet {
            return Err(RegistryError::Config(
                "--verbose and --quiet cannot be combined".to_string(),
            ));
        }

        Ok(())
    }

    /// Flags layered over `base`; a flag replaces the matching environment value
    pub fn client_config(&self, base: ClientConfig) -> ClientConfig {
        let mut config = base;
        if let Some(url) = &self.login_url {
            config.login_url = url.clone();
        }
        if let Some(username) = &self.username {
            config.username = username.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }
        if let Some(token) = &self.token {
            config.token = token.clone();
        }
        config
    }

    /// References to resolve, with the docker.io prefix added under `--assume-hub`
    pub fn image_references(&self) -> Vec<String> {
        self.images
            .iter()
            .map(|image| {
                let bare = !crate::registry::owns(image) && !names_registry_host(image);
                if self.assume_hub && bare {
                    format!("{}{}", crate::registry::reference::IMAGE_PREFIX, image)
                } else {
                    image.clone()
                }
            })
            .collect()
    }
}

/// Whether the first path segment is a registry host such as `quay.io` or `localhost:5000`
fn names_registry_host(image: &str) -> bool {
    match image.split_once('/') {
        Some((first, _)) => first.contains('.') || first.contains(':') || first == "localhost",
        None => false,
    }
}
