use anyhow::Result;
use clap::Parser;
use job_scout::cli::{handle_command, Cli};
use job_scout::config::AppConfig;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("job_scout=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    handle_command(cli, config).await
}
