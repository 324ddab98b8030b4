use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod check;
#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "entrywatch")]
#[command(about = "Checks Global Entry interview availability and pushes the result to Pushover")]
struct Cli {
    /// Path to the watch file (overrides ENTRYWATCH_WATCH_PATH)
    #[arg(long)]
    watch_file: Option<PathBuf>,

    /// Enrollment center id to check (overrides the watch file)
    #[arg(long)]
    location: Option<u32>,

    /// Print the availability report without sending a notification
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = entrywatch_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level);

    check::run_check(&config, cli.watch_file.as_deref(), cli.location, cli.dry_run).await
}

/// `RUST_LOG` wins when set; the configured level is the fallback filter.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();
}
