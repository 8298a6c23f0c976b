use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ttgrab::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments first so --verbose can shape the filter
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries nothing but the result
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting ttgrab v{}", env!("CARGO_PKG_VERSION"));

    // Handle the command
    cli.run().await?;

    Ok(())
}
