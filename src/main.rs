use anyhow::{Context, Result};
use clap::Parser;
use hub_tags::cli::{Args, Runner};
use hub_tags::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let runner = Runner::new(args).context("invalid arguments")?;
    runner
        .run()
        .await
        .context("failed to resolve Docker Hub tags")?;

    Ok(())
}
