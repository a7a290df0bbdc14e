//! Runner tying arguments, configuration and the registry client together

use crate::cli::args::Args;
use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};
use crate::logging::Logger;
use crate::registry::{ImageTag, RegistryClient};
use futures::future::try_join_all;
use serde_json::json;

pub struct Runner {
    args: Args,
    output: Logger,
}

impl Runner {
    pub fn new(args: Args) -> Result<Self> {
        args.validate()?;

        let output = if args.quiet {
            Logger::new_quiet()
        } else {
            Logger::new(args.verbose)
        };

        Ok(Self { args, output })
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.args.client_config(ClientConfig::from_env()?);
        self.output.verbose(&format!("Client configuration: {:?}", config));

        let client = RegistryClient::new(config).await?;
        if client.is_authenticated() {
            self.output.verbose("Requests will carry an authorization token");
        }

        let images = self.owned_images(&client);
        if images.is_empty() {
            return Err(RegistryError::Config(
                "none of the given images are Docker Hub references (try --assume-hub)".to_string(),
            ));
        }

        let resolved = tokio::select! {
            resolved = self.resolve_all(&client, &images) => resolved?,
            _ = tokio::signal::ctrl_c() => return Err(RegistryError::Cancelled),
        };

        self.print(&resolved)?;

        let total: usize = resolved.iter().map(|(_, tags)| tags.len()).sum();
        self.output.summary_kv(
            "Summary",
            &[
                ("Images", resolved.len().to_string()),
                ("Tags", total.to_string()),
                ("Elapsed", self.output.format_duration(self.output.elapsed())),
            ],
        );
        Ok(())
    }

    fn owned_images(&self, client: &RegistryClient) -> Vec<String> {
        self.args
            .image_references()
            .into_iter()
            .filter(|image| {
                let owned = client.owns(image);
                if !owned {
                    self.output
                        .warning(&format!("Skipping {}: not a Docker Hub reference", image));
                }
                owned
            })
            .collect()
    }

    async fn resolve_all(
        &self,
        client: &RegistryClient,
        images: &[String],
    ) -> Result<Vec<(String, Vec<ImageTag>)>> {
        try_join_all(images.iter().map(|image| async move {
            self.output.verbose(&format!("Resolving tags for {}", image));
            let tags = client.tags(image).await?;
            self.output
                .success(&format!("Found {} tags for {}", tags.len(), image));
            Ok::<_, RegistryError>((image.clone(), tags))
        }))
        .await
    }

    fn print(&self, resolved: &[(String, Vec<ImageTag>)]) -> Result<()> {
        if self.args.output == "json" {
            let document: Vec<_> = resolved
                .iter()
                .map(|(image, tags)| json!({ "image": image, "tags": tags }))
                .collect();
            let rendered = serde_json::to_string_pretty(&document).map_err(|e| {
                RegistryError::Config(format!("failed to render JSON output: {}", e))
            })?;
            println!("{}", rendered);
            return Ok(());
        }

        for (image, tags) in resolved {
            if self.output.quiet {
                for line in crate::logging::format_tag_rows(tags) {
                    println!("{}\t{}", image, line);
                }
            } else {
                self.output.tags(image, tags);
            }
        }
        Ok(())
    }
}
