//! Storyline CLI binary.

use anyhow::Result;
use storyline::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the storyline CLI.
///
/// Uses tokio's current_thread runtime; the CLI performs a single load
/// followed by in-memory analysis.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG
    // Example: RUST_LOG=storyline=debug,storyline_jsonl=trace storyline analyze
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storyline=info,storyline_jsonl=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting storyline CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Storyline CLI completed successfully");
    Ok(())
}
