//! Neoscan CLI binary.

use anyhow::Result;
use neoscan::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the neoscan CLI.
///
/// Log output goes to stderr so that query results on stdout stay clean.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // RUST_LOG overrides the default, e.g. RUST_LOG=neoscan=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("neoscan=info,neoscan_io=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting neoscan CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Neoscan CLI completed successfully");
    Ok(())
}
